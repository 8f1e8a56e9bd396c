//! Embedded word lists
//!
//! Curated French word lists compiled into the binary, one list per
//! supported length. Words are stored uppercase with accents already
//! stripped, matching the [`Word`](crate::core::Word) normal form.

/// Embedded 5-letter words (83 words)
pub const WORDS_5: &[&str] = &[
    "TABLE", "LIVRE", "ROUGE", "BLANC", "FLEUR", "CHIEN", "POMME", "SUCRE",
    "PLAGE", "NUAGE", "TIGRE", "PIANO", "BARBE", "CHANT", "DANSE", "ECOLE",
    "ETAGE", "FORET", "GIVRE", "HERBE", "IMAGE", "JOUET", "LAMPE", "LUNDI",
    "MARDI", "MELON", "MERCI", "MONDE", "MUSEE", "NEIGE", "OCEAN", "ONGLE",
    "OPERA", "PANDA", "PECHE", "PERLE", "PHARE", "PLUIE", "POIRE", "PORTE",
    "POSTE", "POULE", "PRUNE", "RADIO", "REGLE", "REINE", "ROUTE", "SABLE",
    "SALON", "SANTE", "SIEGE", "STYLO", "TARTE", "TERRE", "TITRE", "VACHE",
    "VAGUE", "VERRE", "VESTE", "VILLE", "VITRE", "VOILE", "ZEBRE", "TASSE",
    "BRUME", "CREME", "DRAME", "EPICE", "FABLE", "GRAIN", "ORAGE", "PLUME",
    "PRISE", "QUART", "QUEUE", "SIROP", "SUJET", "TAUPE", "TEMPS", "TENTE",
    "USINE", "VENTE", "VIVRE",
];

/// Number of embedded 5-letter words
pub const WORDS_5_COUNT: usize = 83;

/// Embedded 6-letter words (64 words)
pub const WORDS_6: &[&str] = &[
    "MAISON", "JARDIN", "ORANGE", "VIOLET", "CHAISE", "BANANE", "CANARD", "CERISE",
    "CITRON", "COUSIN", "DRAGON", "ECLAIR", "ENFANT", "FLECHE", "FRAISE", "GARCON",
    "GATEAU", "GIRAFE", "LEGUME", "MANGUE", "MARCHE", "MIROIR", "MOUTON", "MUGUET",
    "NAVIRE", "NOMBRE", "OISEAU", "PANIER", "PAPIER", "PARFUM", "PIRATE", "PLANTE",
    "POIVRE", "PRINCE", "RAISIN", "RENARD", "SAISON", "SOLEIL", "SOURIS", "TIROIR",
    "TOMATE", "TORTUE", "TULIPE", "VIOLON", "VOYAGE", "RAISON", "BALCON", "BOUGIE",
    "CHEVAL", "COFFRE", "CUIVRE", "EPONGE", "ETOILE", "FLACON", "GOUTTE", "JAMBON",
    "MOULIN", "NUANCE", "ORTEIL", "POTAGE", "RIVAGE", "TRESOR", "VALLEE", "VERGER",
];

/// Number of embedded 6-letter words
pub const WORDS_6_COUNT: usize = 64;

/// Embedded 7-letter words (45 words)
pub const WORDS_7: &[&str] = &[
    "CUISINE", "CHAMBRE", "ARMOIRE", "LUMIERE", "FENETRE", "BALEINE", "CAROTTE", "CHATEAU",
    "CLAVIER", "COLLINE", "COMPOTE", "DAUPHIN", "DESSERT", "DIAMANT", "EPINARD", "FOUGERE",
    "FROMAGE", "GRENIER", "HORIZON", "JOURNAL", "LAVANDE", "LEOPARD", "LICORNE", "MESANGE",
    "MUSIQUE", "NAVETTE", "OCTOBRE", "PANACHE", "PAPRIKA", "PELICAN", "PLANETE", "POULAIN",
    "PUPITRE", "RIVIERE", "SARDINE", "SEMAINE", "SERPENT", "SIFFLET", "SILENCE", "TABLEAU",
    "TERRAIN", "THEATRE", "TORCHON", "VOITURE", "VOYELLE",
];

/// Number of embedded 7-letter words
pub const WORDS_7_COUNT: usize = 45;

/// Embedded 8-letter words (31 words)
pub const WORDS_8: &[&str] = &[
    "ESCALIER", "PAPILLON", "ELEPHANT", "MONTAGNE", "CAMPAGNE", "AQUARIUM", "AUTRUCHE", "BOUSSOLE",
    "CHOCOLAT", "COQUILLE", "CREVETTE", "DOUZAINE", "ECUREUIL", "EQUATEUR", "FONTAINE", "HERISSON",
    "LANTERNE", "MAGICIEN", "MANDARIN", "MEDECINE", "MUSICIEN", "NOISETTE", "PANTHERE", "PEINTURE",
    "PERRUCHE", "QUESTION", "SAUCISSE", "TONNERRE", "VAISSEAU", "VENDREDI", "VIOLETTE",
];

/// Number of embedded 8-letter words
pub const WORDS_8_COUNT: usize = 31;
