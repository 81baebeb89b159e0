// Single source of truth for all default values.

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
pub const LOG_FILTER_ENV: &str = "ELIG_LOG";

// --- Disease ontology manual overlay ---

/// Doids that define a main cancer category.
pub const MAIN_CANCER_DOIDS: &[&str] = &[
    "0050619", // paranasal sinus cancer
    "0060119", // pharynx cancer
    "0080374", // gastroesophageal cancer
    "119",     // vaginal cancer
    "219",     // colon cancer
    "263",     // kidney cancer
    "363",     // uterine cancer
    "734",     // urethra cancer
    "1245",    // vulva cancer
    "1324",    // lung cancer
    "1325",    // bronchus cancer
    "1380",    // endometrial cancer
    "1521",    // cecum cancer
    "1612",    // breast cancer
    "1725",    // peritoneum cancer
    "1781",    // thyroid gland cancer
    "1793",    // pancreatic cancer
    "1964",    // fallopian tube cancer
    "1993",    // rectum cancer
    "2394",    // ovarian cancer
    "2596",    // larynx cancer
    "2998",    // testicular cancer
    "3277",    // thymus cancer
    "3571",    // liver cancer
    "3953",    // adrenal gland cancer
    "4159",    // skin cancer
    "4362",    // cervical cancer
    "4607",    // biliary tract cancer
    "4960",    // bone marrow cancer
    "5041",    // esophageal cancer
    "8564",    // lip cancer
    "8649",    // tongue cancer
    "8850",    // salivary gland cancer
    "9256",    // colorectal cancer
    "10283",   // prostate cancer
    "10534",   // stomach cancer
    "10811",   // nasal cavity cancer
    "11054",   // urinary bladder cancer
    "11239",   // appendix cancer
    "11615",   // penile cancer
    "11819",   // ureter cancer
    "11920",   // tracheal cancer
    "11934",   // head and neck cancer
    "14110",   // anus cancer
    "3068",    // glioblastoma
];

/// (adeno-squamous, squamous, adeno) doid triples.
pub const ADENO_SQUAMOUS_MAPPINGS: &[(&str, &str, &str)] = &[
    ("4829", "3907", "3910"),    // lung
    ("5623", "5514", "3458"),    // breast
    ("5624", "5537", "4896"),    // bile duct
    ("5625", "3748", "4914"),    // esophageal
    ("5626", "5530", "4923"),    // thymus
    ("5627", "5535", "3500"),    // gallbladder
    ("5628", "5527", "3502"),    // ampulla of vater
    ("5629", "234", "5519"),     // colon
    ("5630", "6961", "6316"),    // bartholin's gland / vulva
    ("5631", "5533", "2870"),    // endometrial
    ("5634", "10287", "2526"),   // prostate
    ("5635", "5516", "5517"),    // stomach
    ("5636", "3744", "3702"),    // cervical
    ("5637", "0080323", "4074"), // stomach
    ("4830", "1749", "299"),     // adenosquamous carcinoma
];

/// (child, extra parent) edges missing from the ontology itself.
pub const ADDITIONAL_DOIDS_PER_DOID: &[(&str, &str)] = &[
    ("4829", "3908"),    // lung adenosquamous > NSCLC
    ("6438", "6039"),    // malignant choroid melanoma > uveal melanoma
    ("7807", "6039"),    // choroid necrotic melanoma > uveal melanoma
    ("6994", "6039"),    // iris melanoma > uveal melanoma
    ("6524", "6039"),    // ciliary body melanoma > uveal melanoma
    ("6039", "1752"),    // uveal melanoma > ocular melanoma
    ("1751", "1752"),    // malignant conjunctival melanoma > ocular melanoma
    ("234", "0050861"),  // colon adenocarcinoma > colorectal adenocarcinoma
    ("1996", "0050861"), // rectum adenocarcinoma > colorectal adenocarcinoma
    ("1520", "0080199"), // colon carcinoma > colorectal carcinoma
];

/// (child, parent) ontology edges flagged as wrong. Not applied to closures yet.
pub const CHILD_TO_PARENT_RELATIONSHIPS_TO_EXCLUDE: &[(&str, &str)] = &[
    ("235", "1475"), // colonic benign neoplasm > lymphangioma
];
