//! Static imprint page shown in its own tab.

pub const TITLE: &str = "Impressum";

pub const TEXT: &str = "\
Spielplan – ein inoffizieller Begleiter für das Staatstheater Augsburg.

Die angezeigten Termine stammen aus dem offenen Datenbestand
\"Datenraum Kultur\" des Staatstheaters Augsburg und werden bei jedem
Start bzw. bei jeder Aktualisierung neu abgerufen. Für Richtigkeit und
Vollständigkeit wird keine Gewähr übernommen; maßgeblich sind die
Angaben des Theaters.

Ticket- und Detail-Links öffnen sich im Standardbrowser.

Staatstheater Augsburg
Am Alten Einlaß 1
86150 Augsburg";
