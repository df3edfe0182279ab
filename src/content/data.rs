//! Compiled-in portfolio tables.
//!
//! Experience is listed most-recent first as authored; nothing downstream sorts it.

use super::{ExperienceEntry, Links, Profile, Project, SiteContent};

pub const PROFILE: Profile = Profile {
    name: "Anherutowa Calvo",
    tagline: "ML + Bio • Molecular Simulation • Builder of Scalable Algorithms",
    about: "Princeton junior blending machine learning, molecular dynamics, and computational biology. \
            Experienced in protein language models, ligand docking, and hybrid physics–ML pipelines. \
            Passionate about building scalable algorithms for drug discovery and biotech innovation.",
    location: "Princeton, New Jersey",
    email: "ac1180@princeton.edu",
    open_to: "Internships • Collabs • Speaking",
    focus: "ML, MD, Biotech Innovation",
};

pub const LINKS: Links = Links {
    github: Some("https://github.com/Atbcalvo"),
    linkedin: Some("https://linkedin.com/in/anherutowacalvo"),
    resume: Some("CV.pdf"),
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Vaccine Mutation Embedding Trajectory Prediction",
        blurb: "Simulated and forecasted antigenic drift using protein LLM embeddings, \
                advancing vaccine strain selection pipelines at Pfizer.",
        tags: &["Protein LLMs", "PyTorch", "UMAP"],
        href: "#",
    },
    Project {
        title: "Segmental Hash-Guided Alignment (SHGA)",
        blurb: "Designed an O(n log n) sequence alignment algorithm that cut runtime from days \
                to hours on 150k+ proteins while preserving accuracy.",
        tags: &["Algorithms", "Python", "HPC"],
        href: "#",
    },
    Project {
        title: "Optimized Modeling of ESM2",
        blurb: "Extended sequence coverage beyond 1024 tokens by contrastively aligning N- and \
                C-terminal encoders, boosting spike protein predictions.",
        tags: &["ESM2", "Contrastive Learning", "CLIP"],
        href: "#",
    },
    Project {
        title: "Bionics: Myoelectric Prosthetic Hand",
        blurb: "Built EMG-driven prosthetic with ML gesture recognition and adaptive grip, \
                improving dexterity for real-world use.",
        tags: &["Arduino", "Python", "3D Printing"],
        href: "#",
    },
    Project {
        title: "Artificial Heart Prototype",
        blurb: "Developed a biomechanical heart model with COMSOL + 3D bioprinting, simulating \
                fluid dynamics for optimized cardiac output.",
        tags: &["MATLAB", "COMSOL", "Bioprinting"],
        href: "#",
    },
    Project {
        title: "Comparative Analysis of C. bescii and T. kivui",
        blurb: "Used AlphaFold and Rosetta docking to study sugar metabolism pathways, informing \
                strategies for biofuel production.",
        tags: &["AlphaFold", "Rosetta", "Biofuels"],
        href: "#",
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        org: "Pfizer Inc.",
        role: "ML/AI Research Intern",
        time: "May 2025 – Present",
        bullets: &[
            "Engineered protein language models, reducing perplexity by >98% and boosting virology benchmarks.",
            "Advanced vaccine strain selection with embedding-based mutation trajectory prediction.",
            "Built evaluation harnesses balancing generalization and specialization in adapted protein LLMs.",
        ],
    },
    ExperienceEntry {
        org: "Joseph Research Group, Princeton",
        role: "ML & Molecular Simulation Researcher",
        time: "Mar 2025 – Present",
        bullets: &[
            "Developed hybrid physics–ML pipelines coupling coarse-grained MD with thermodynamic analysis.",
            "Mapped condensate phase behavior and prioritized small-molecule modulators for ALS and cancer.",
        ],
    },
    ExperienceEntry {
        org: "Conway Research Group, Princeton",
        role: "Student Researcher",
        time: "Apr 2024 – Present",
        bullets: &[
            "Applied AlphaFold and Rosetta docking to probe carbohydrate transporter mechanisms in C. bescii.",
            "Linked docking predictions to growth assays, deepening insight into protein–ligand interactions.",
        ],
    },
    ExperienceEntry {
        org: "Stanford University",
        role: "ML/AI Research Intern",
        time: "Jun 2025 – Aug 2025",
        bullets: &[
            "Built self-supervised pipelines for medical imaging with CLIP-style image–metadata alignment.",
            "Fine-tuned ViT/UNet for classification and segmentation with calibrated, uncertainty-aware outputs.",
        ],
    },
    ExperienceEntry {
        org: "Johns Hopkins University",
        role: "ML/AI Research Intern",
        time: "Jul 2024 – Oct 2024",
        bullets: &[
            "Architected hybrid deep learning models for breast cancer detection on mammography/MRI.",
            "Automated tumor segmentation, reducing radiologist review time by 40%+.",
        ],
    },
    ExperienceEntry {
        org: "Merck & Co.",
        role: "ML/AI Research Intern",
        time: "Jan 2025 – Feb 2025",
        bullets: &[
            "Developed forecasting model for varicella vaccine demand using epidemiological trends.",
            "Evaluated pediatric vaccine formulations for stability and efficacy across conditions.",
        ],
    },
    ExperienceEntry {
        org: "National Institutes of Health",
        role: "Epidemiology & Public Health Intern",
        time: "Aug 2024 – Oct 2024",
        bullets: &[
            "Built Guam Health Initiative Survey, a secure full-stack platform for epidemiological tracking.",
            "Visualized disease prevalence trends to support public health policy recommendations.",
        ],
    },
    ExperienceEntry {
        org: "Andlinger Center for Energy & Environment, Princeton",
        role: "Bioengineering Intern",
        time: "May 2024 – Aug 2024",
        bullets: &[
            "Engineered thermophilic lignocellulose-degrading bacteria to enhance biofuel production.",
            "Performed metabolomic and proteomic analyses to refine bioconversion processes.",
        ],
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Studying Chemical & Biological Engineering with minors in Statistics & Machine Learning and Math. \
     My work sits at the interface of machine learning and molecular biophysics—building models that \
     make sense of proteins, ligands, and biological systems at scale.",
    "I’m especially interested in how computational methods can accelerate drug discovery, from large \
     language models to molecular dynamics and docking simulations. I care about problems that bridge \
     deep science and scalable systems, where new algorithms can unlock biomedical impact. Outside of \
     research, I enjoy skateboarding, boba, and building projects that blend technical depth with \
     creative communication.",
];

impl SiteContent {
    /// The portfolio as compiled into the binary.
    pub const fn portfolio() -> Self {
        Self {
            profile: PROFILE,
            links: LINKS,
            projects: PROJECTS,
            experience: EXPERIENCE,
            about_paragraphs: ABOUT_PARAGRAPHS,
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::portfolio()
    }
}
