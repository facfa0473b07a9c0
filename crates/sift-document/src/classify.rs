//! Role classification from a bare job title.
//!
//! `sift classify "Assistant Professor of Physics"` builds a complete [`RoleProfile`] without a
//! role file: the department is inferred from title keywords, and the skill lists come from
//! discipline templates. Titles that match no discipline get lists synthesized from the
//! department name.
//!
//! Keywords of three characters or fewer (`cs`, `ai`, `ece`, `nlp`) only match a whole word of
//! the title, while longer keywords match anywhere. A plain substring test would read
//! "Professor of Physics" as Computer Science and "Department Chair" as Artificial Intelligence.

use crate::RoleProfile;

/// Maximum number of required skills kept on a classified role.
const MAX_REQUIRED: usize = 6;
/// Maximum number of preferred skills kept on a classified role.
const MAX_PREFERRED: usize = 4;
/// Department used when no keyword matches.
const DEFAULT_DEPARTMENT: &str = "Academic Affairs";
/// Keywords no longer than this must match a whole word, so "cs" does not fire on "physics".
const SHORT_KEYWORD_LEN: usize = 3;

/// Skill lists for one discipline.
#[derive(Debug)]
struct SkillTemplate {
    /// Required skills.
    required: &'static [&'static str],
    /// Preferred skills.
    preferred: &'static [&'static str],
    /// Research focus.
    research: &'static [&'static str],
    /// Teaching requirements.
    teaching: &'static [&'static str],
}

/// What a title must mention for a rule to apply.
#[derive(Debug)]
enum Trigger {
    /// Any of the listed keywords.
    Any(&'static [&'static str]),
    /// AI ethics, spelled out or as "ethics" next to an AI keyword.
    AiEthics,
}

impl Trigger {
    /// Checks the trigger against a lower-cased title.
    fn fires(&self, title: &str) -> bool {
        match self {
            Self::Any(keywords) => keywords.iter().any(|k| mentions(title, k)),
            Self::AiEthics => {
                mentions(title, "ai ethics")
                    || (mentions(title, "ethics")
                        && (mentions(title, "ai") || mentions(title, "artificial intelligence")))
            }
        }
    }
}

/// Department inference rules, first match wins.
const DEPARTMENT_RULES: &[(Trigger, &str)] = &[
    (Trigger::Any(&["data science"]), "Data Science"),
    (Trigger::Any(&["computer science", "cs"]), "Computer Science"),
    // Interdisciplinary; its usual academic home is computer science
    (Trigger::AiEthics, "Computer Science"),
    (
        Trigger::Any(&["ai", "artificial intelligence"]),
        "Artificial Intelligence",
    ),
    (Trigger::Any(&["mathematics", "statistics"]), "Mathematics"),
    (
        Trigger::Any(&["electrical", "ece"]),
        "Electrical and Computer Engineering",
    ),
    (Trigger::Any(&["finance"]), "Finance"),
    (Trigger::Any(&["economics"]), "Economics"),
    (Trigger::Any(&["marketing"]), "Marketing"),
    (Trigger::Any(&["accounting"]), "Accounting"),
    (Trigger::Any(&["psychology"]), "Psychology"),
    (Trigger::Any(&["biology", "biological"]), "Biology"),
    (Trigger::Any(&["chemistry", "chemical"]), "Chemistry"),
    (Trigger::Any(&["physics"]), "Physics"),
    (Trigger::Any(&["mechanical"]), "Mechanical Engineering"),
    (Trigger::Any(&["civil"]), "Civil Engineering"),
    (Trigger::Any(&["biomedical"]), "Biomedical Engineering"),
    (Trigger::Any(&["cybersecurity", "security"]), "Cybersecurity"),
    (
        Trigger::Any(&["nlp", "natural language"]),
        "Natural Language Processing",
    ),
    (Trigger::Any(&["computer vision", "vision"]), "Computer Vision"),
];

/// Skill templates chosen directly from title keywords, first match wins.
const TITLE_TEMPLATES: &[(Trigger, SkillTemplate)] = &[
    (
        Trigger::Any(&["data science"]),
        SkillTemplate {
            required: &[
                "statistics",
                "machine learning",
                "python",
                "data visualization",
                "teaching",
            ],
            preferred: &["deep learning", "big data", "nlp"],
            research: &[
                "applied machine learning",
                "data mining",
                "predictive modeling",
            ],
            teaching: &[
                "intro to data science",
                "ml courses",
                "capstone supervision",
            ],
        },
    ),
    (
        Trigger::Any(&["computer science", "cs"]),
        SkillTemplate {
            required: &[
                "data structures",
                "algorithms",
                "teaching",
                "software engineering",
            ],
            preferred: &["systems", "databases", "ai"],
            research: &[
                "computer science research",
                "software systems",
                "ai applications",
            ],
            teaching: &["undergraduate cs core", "project supervision"],
        },
    ),
    (
        Trigger::Any(&["mathematics", "statistics"]),
        SkillTemplate {
            required: &["calculus", "linear algebra", "probability", "teaching"],
            preferred: &["numerical methods", "stochastic processes"],
            research: &["applied math", "statistical modeling"],
            teaching: &["calc sequence", "probability", "mentoring"],
        },
    ),
    (Trigger::Any(&["finance"]), FINANCE),
    (
        Trigger::Any(&["economics"]),
        SkillTemplate {
            required: &["microeconomics", "macroeconomics", "econometrics"],
            preferred: &["development economics", "behavioral economics"],
            research: &["applied micro", "macro policy", "labor economics"],
            teaching: &[
                "econometrics",
                "intermediate micro/macro",
                "seminar supervision",
            ],
        },
    ),
    (
        Trigger::AiEthics,
        SkillTemplate {
            required: &[
                "algorithmic fairness",
                "responsible ai",
                "policy analysis",
            ],
            preferred: &["model interpretability", "privacy-preserving ml"],
            research: &[
                "accountability in ai",
                "ethical governance",
                "ai regulation",
            ],
            teaching: &["responsible ai", "ethics seminars", "policy workshops"],
        },
    ),
    (
        Trigger::Any(&["nlp", "natural language"]),
        SkillTemplate {
            required: &["nlp", "python", "machine learning"],
            preferred: &["transformers", "information retrieval"],
            research: &["language modeling", "text mining", "multilingual nlp"],
            teaching: &["nlp", "ml for text", "project supervision"],
        },
    ),
    (
        Trigger::Any(&["computer vision", "vision"]),
        SkillTemplate {
            required: &["computer vision", "deep learning", "python"],
            preferred: &["3d vision", "self-supervised learning"],
            research: &[
                "object detection",
                "multimodal learning",
                "medical imaging",
            ],
            teaching: &["computer vision", "deep learning", "capstone mentorship"],
        },
    ),
    (
        Trigger::Any(&["cybersecurity", "security"]),
        SkillTemplate {
            required: &["network security", "cryptography", "threat modeling"],
            preferred: &["cloud security", "secure software"],
            research: &["intrusion detection", "malware analysis", "privacy"],
            teaching: &["information security", "crypto", "secure coding"],
        },
    ),
    (
        Trigger::Any(&["mechanical"]),
        SkillTemplate {
            required: &["mechanics", "cad", "materials", "numerical methods"],
            preferred: &["robotics", "additive manufacturing"],
            research: &["dynamics", "design optimization", "energy systems"],
            teaching: &["mechanics sequence", "cad labs", "design studio"],
        },
    ),
    (
        Trigger::Any(&["civil"]),
        SkillTemplate {
            required: &[
                "structural analysis",
                "geotechnical",
                "project management",
            ],
            preferred: &["sustainable design", "bim"],
            research: &["infrastructure resilience", "transportation systems"],
            teaching: &["structural design", "construction management"],
        },
    ),
    (
        Trigger::Any(&["biomedical"]),
        SkillTemplate {
            required: &["biomechanics", "signal processing", "medical devices"],
            preferred: &["neural engineering", "bioinstrumentation"],
            research: &["rehabilitation engineering", "biomedical imaging"],
            teaching: &["biomedical instrumentation", "bio-signal processing"],
        },
    ),
    (
        Trigger::Any(&["psychology"]),
        SkillTemplate {
            required: &["research design", "statistics", "cognitive psychology"],
            preferred: &["neuroimaging", "computational modeling"],
            research: &["cognition", "mental health", "developmental psychology"],
            teaching: &["research methods", "cognitive psychology"],
        },
    ),
    (
        Trigger::Any(&["marketing"]),
        SkillTemplate {
            required: &[
                "consumer behavior",
                "marketing analytics",
                "research methods",
            ],
            preferred: &["digital marketing", "causal inference"],
            research: &["brand strategy", "digital platforms"],
            teaching: &["marketing analytics", "consumer behavior"],
        },
    ),
    (
        Trigger::Any(&["accounting"]),
        SkillTemplate {
            required: &["financial accounting", "auditing", "data analysis"],
            preferred: &["forensic accounting", "tax policy"],
            research: &["disclosure", "earnings quality", "audit quality"],
            teaching: &["financial accounting", "auditing"],
        },
    ),
    (
        Trigger::Any(&["biology"]),
        SkillTemplate {
            required: &["molecular biology", "experimental design", "statistics"],
            preferred: &["genomics", "single-cell analysis"],
            research: &["cell biology", "genetics", "systems biology"],
            teaching: &["molecular biology", "lab supervision"],
        },
    ),
    (
        Trigger::Any(&["chemistry"]),
        SkillTemplate {
            required: &[
                "organic/inorganic chemistry",
                "spectroscopy",
                "lab safety",
            ],
            preferred: &["materials chemistry", "computational chemistry"],
            research: &["catalysis", "materials synthesis", "analytical methods"],
            teaching: &["organic chemistry", "laboratory instruction"],
        },
    ),
    (
        Trigger::Any(&["physics"]),
        SkillTemplate {
            required: &[
                "classical mechanics",
                "quantum mechanics",
                "statistical physics",
            ],
            preferred: &["condensed matter", "photonics"],
            research: &["quantum materials", "optics", "astrophysics"],
            teaching: &["intro physics", "advanced labs"],
        },
    ),
];

/// Finance skills, shared by the title and department tables.
const FINANCE: SkillTemplate = SkillTemplate {
    required: &[
        "financial modeling",
        "quantitative analysis",
        "econometrics",
        "corporate finance",
    ],
    preferred: &["blockchain finance", "behavioral economics", "fintech"],
    research: &["asset pricing", "risk management", "market microstructure"],
    teaching: &[
        "graduate-level finance",
        "investments",
        "financial econometrics",
    ],
};

/// Department templates used when no title rule matched.
const DEPARTMENT_TEMPLATES: &[(&str, SkillTemplate)] = &[
    (
        "Mechanical Engineering",
        SkillTemplate {
            required: &[
                "thermodynamics",
                "mechanics of materials",
                "cad",
                "engineering design",
            ],
            preferred: &[
                "finite element analysis",
                "robotics",
                "sustainable manufacturing",
            ],
            research: &["fluid dynamics", "heat transfer", "advanced manufacturing"],
            teaching: &[
                "undergraduate thermodynamics",
                "mechanical design labs",
                "capstone project supervision",
            ],
        },
    ),
    (
        "Mathematics",
        SkillTemplate {
            required: &[
                "linear algebra",
                "calculus",
                "mathematical proofs",
                "statistics",
            ],
            preferred: &["numerical methods", "mathematical modeling", "topology"],
            research: &[
                "algebraic geometry",
                "probability theory",
                "applied mathematics",
            ],
            teaching: &[
                "undergraduate calculus",
                "linear algebra courses",
                "graduate seminars in pure mathematics",
            ],
        },
    ),
    ("Finance", FINANCE),
    (
        "Artificial Intelligence",
        SkillTemplate {
            required: &[
                "machine learning",
                "python",
                "deep learning",
                "evaluation methodologies",
            ],
            preferred: &["deep reinforcement learning", "self-supervised learning"],
            research: &[
                "representation learning",
                "responsible ai",
                "foundation models",
            ],
            teaching: &["machine learning", "deep learning", "ml systems labs"],
        },
    ),
    (
        "Computer Science",
        SkillTemplate {
            required: &[
                "data structures",
                "algorithms",
                "software engineering",
                "databases",
            ],
            preferred: &["distributed systems", "computer networks", "security"],
            research: &[
                "software systems",
                "distributed computing",
                "program analysis",
            ],
            teaching: &[
                "intro to cs",
                "data structures & algorithms",
                "software engineering project",
            ],
        },
    ),
    (
        "Natural Language Processing",
        SkillTemplate {
            required: &["nlp", "python", "machine learning", "text processing"],
            preferred: &["transformers", "information retrieval"],
            research: &["language modeling", "text mining", "multilingual nlp"],
            teaching: &["nlp", "ml for text", "nlp project supervision"],
        },
    ),
    (
        "Computer Vision",
        SkillTemplate {
            required: &["computer vision", "deep learning", "python"],
            preferred: &["3d vision", "multimodal learning"],
            research: &["object detection", "segmentation", "medical imaging"],
            teaching: &["computer vision", "deep learning", "vision labs"],
        },
    ),
    (
        "Cybersecurity",
        SkillTemplate {
            required: &["network security", "cryptography", "threat modeling"],
            preferred: &["cloud security", "secure software"],
            research: &["intrusion detection", "malware analysis", "privacy"],
            teaching: &[
                "information security",
                "cryptography",
                "secure coding labs",
            ],
        },
    ),
    (
        "Economics",
        SkillTemplate {
            required: &["microeconomics", "macroeconomics", "econometrics"],
            preferred: &["development economics", "behavioral economics"],
            research: &["applied microeconomics", "macro policy", "labor economics"],
            teaching: &[
                "econometrics",
                "intermediate micro/macro",
                "policy seminars",
            ],
        },
    ),
    (
        "Marketing",
        SkillTemplate {
            required: &[
                "consumer behavior",
                "marketing analytics",
                "research methods",
            ],
            preferred: &["digital marketing", "causal inference"],
            research: &["brand strategy", "digital platforms", "market design"],
            teaching: &[
                "marketing analytics",
                "consumer behavior",
                "digital marketing labs",
            ],
        },
    ),
    (
        "Accounting",
        SkillTemplate {
            required: &["financial accounting", "auditing", "data analysis"],
            preferred: &["forensic accounting", "tax policy"],
            research: &["disclosure", "earnings quality", "audit quality"],
            teaching: &[
                "financial accounting",
                "auditing",
                "case-based seminars",
            ],
        },
    ),
    (
        "Biology",
        SkillTemplate {
            required: &[
                "molecular biology",
                "experimental design",
                "biostatistics",
            ],
            preferred: &["genomics", "single-cell analysis"],
            research: &["cell biology", "genetics", "systems biology"],
            teaching: &[
                "molecular biology",
                "genetics labs",
                "research mentorship",
            ],
        },
    ),
    (
        "Chemistry",
        SkillTemplate {
            required: &["organic chemistry", "analytical methods", "spectroscopy"],
            preferred: &["materials chemistry", "computational chemistry"],
            research: &["catalysis", "materials synthesis", "electrochemistry"],
            teaching: &[
                "organic chemistry",
                "analytical chemistry labs",
                "synthesis workshops",
            ],
        },
    ),
    (
        "Physics",
        SkillTemplate {
            required: &[
                "classical mechanics",
                "quantum mechanics",
                "statistical physics",
            ],
            preferred: &["condensed matter", "photonics"],
            research: &["quantum materials", "optics", "astrophysics"],
            teaching: &[
                "introductory physics",
                "advanced physics labs",
                "theory seminars",
            ],
        },
    ),
    (
        "Electrical and Computer Engineering",
        SkillTemplate {
            required: &["signals and systems", "digital logic", "embedded systems"],
            preferred: &["vlsi", "machine learning hardware"],
            research: &["signal processing", "wireless systems", "edge ai"],
            teaching: &["circuits", "digital systems labs", "embedded systems"],
        },
    ),
];

/// Builds a role profile from a job title alone.
pub fn classify_role(title: &str) -> RoleProfile {
    let department = infer_department(title);
    let lower = title.to_lowercase();

    let template = TITLE_TEMPLATES
        .iter()
        .find(|(trigger, _)| trigger.fires(&lower))
        .map(|(_, template)| template)
        .or_else(|| {
            DEPARTMENT_TEMPLATES
                .iter()
                .find(|(name, _)| *name == department)
                .map(|(_, template)| template)
        });

    let (required, preferred, research, teaching) = match template {
        Some(t) => (
            owned(t.required),
            owned(t.preferred),
            owned(t.research),
            owned(t.teaching),
        ),
        None => synthesize(&department),
    };

    RoleProfile {
        id: title_to_id(title),
        title: title.to_string(),
        department,
        required_skills: dedup_capped(required, MAX_REQUIRED),
        preferred_skills: dedup_capped(preferred, MAX_PREFERRED),
        research_focus: research,
        teaching_requirements: teaching,
    }
}

/// Infers the owning department from keywords in a job title.
pub fn infer_department(title: &str) -> String {
    let lower = title.to_lowercase();
    DEPARTMENT_RULES
        .iter()
        .find(|(trigger, _)| trigger.fires(&lower))
        .map_or(DEFAULT_DEPARTMENT, |(_, department)| *department)
        .to_string()
}

/// Converts a title into a snake-case identifier.
///
/// `/ - ( ) ,` separate words and `&` becomes `and`.
pub fn title_to_id(title: &str) -> String {
    title
        .replace(['/', '-', '(', ')', ','], " ")
        .replace('&', " and ")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Checks whether a lower-cased title mentions a keyword.
///
/// Short keywords must appear as a whole word; longer ones match anywhere.
fn mentions(title: &str, keyword: &str) -> bool {
    if keyword.len() > SHORT_KEYWORD_LEN {
        return title.contains(keyword);
    }
    title
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == keyword)
}

/// Department-specific lists for disciplines without a template.
fn synthesize(department: &str) -> (Vec<String>, Vec<String>, Vec<String>, Vec<String>) {
    let dept = department.to_lowercase();
    (
        vec![
            format!("foundations of {dept}"),
            format!("research methods in {dept}"),
            format!("data analysis for {dept}"),
        ],
        vec![
            format!("emerging topics in {dept}"),
            format!("industry collaboration in {dept}"),
        ],
        vec![format!("applied {dept}"), format!("advanced {dept} techniques")],
        vec![
            format!("introductory {dept} courses"),
            format!("advanced {dept} seminars"),
        ],
    )
}

/// Copies a static list.
fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Removes repeated entries (keeping the first) and truncates to `cap`.
fn dedup_capped(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(cap);
    for item in items {
        if result.len() == cap {
            break;
        }
        if !result.contains(&item) {
            result.push(item);
        }
    }
    result
}
