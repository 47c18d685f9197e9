use crate::components::icon::Icon;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Problem", href: "#problem" },
    NavLink { label: "Methodology", href: "#modelling" },
    NavLink { label: "Explorer", href: "#explorer" },
    NavLink { label: "System", href: "#overview" },
];

pub const TAGLINE: &str =
    "A data-driven decision support system for monitoring and predicting vineyard water stress.";

pub const PROBLEM_PARAGRAPHS: &[&str] = &[
    "Water stress is one of the most critical challenges in modern Mediterranean viticulture. In these environments, water availability often becomes the limiting factor for grape quality and yield.",
    "However, vineyards are not uniform. Intra-parcel spatial heterogeneity driven by soil depth, slope, and vine vigor means that different zones of the same field respond differently to climatic pressure.",
];

pub const PROBLEM_QUOTE: &str =
    "Timing is everything. Predicting stress before it manifests physiologically allows for surgical irrigation interventions, preserving resources and ensuring crop resilience.";

pub struct DataSource {
    pub title: &'static str,
    pub source: &'static str,
    pub desc: &'static str,
    pub icon: Icon,
}

pub const DATA_SOURCES: &[DataSource] = &[
    DataSource {
        title: "Sentinel-2",
        source: "Copernicus Programme",
        desc: "High-resolution multi-spectral imagery (10m) used to derive vegetation indices and monitor leaf-level water content through the season.",
        icon: Icon::Map,
    },
    DataSource {
        title: "ERA5 Climatic",
        source: "ECMWF Reanalysis",
        desc: "Integrating temperature, VPD (Vapour Pressure Deficit), humidity, and radiation data to model the atmospheric demand for water.",
        icon: Icon::CloudSun,
    },
    DataSource {
        title: "Field Observations",
        source: "In-situ Monitoring",
        desc: "Ground-truth phenological stages (BBCH) and field notes are integrated to calibrate the models to specific varietal behaviors.",
        icon: Icon::Database,
    },
];

/// Numbered methodology step; the number is its 1-based position.
pub struct MethodStep {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const METHOD_STEPS: &[MethodStep] = &[
    MethodStep {
        title: "Data Integration",
        desc: "Harmonizing spectral, climatic, and phenological variables into a unified parcel grid.",
    },
    MethodStep {
        title: "Supervised Learning",
        desc: "Training models to recognize non-linear relationships between drivers and stress levels.",
    },
    MethodStep {
        title: "Short-term Prediction",
        desc: "Generating actionable insights for a 3–7 day operational window.",
    },
];

pub const MODELLING_PARAGRAPHS: &[&str] = &[
    "The project employs a supervised machine learning framework that integrates spectral, climatic, and phenological variables to model vineyard dynamics.",
    "The primary objective is the short-term prediction of water stress within a 3–7 day horizon, allowing for proactive field management and precise resource allocation.",
    "Model outputs are specifically designed to be interpretable for decision support, ensuring that complex data patterns are translated into specific insights for operational tasks.",
];

pub const IMPACT_INTRO: &str =
    "The true value of VITIs lies in translating high-dimensional data into specific, spatialized indicators that support real-world decisions.";

pub struct Impact {
    pub label: &'static str,
    pub icon: Icon,
}

pub const IMPACTS: &[Impact] = &[
    Impact { label: "Targeted Irrigation", icon: Icon::Activity },
    Impact { label: "Yield Protection", icon: Icon::ChevronRight },
    Impact { label: "Resource Efficiency", icon: Icon::Database },
    Impact { label: "Risk Mitigation", icon: Icon::Activity },
];

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: Icon,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Monitoring",
        desc: "Real-time spatial visualization of the Crop Water Stress Index (CWSI) across different blocks and varieties.",
        icon: Icon::Layout,
    },
    Feature {
        title: "Predictions",
        desc: "Short-term stress forecasts based on ML inference, including variable importance analysis (VPD, Temperature).",
        icon: Icon::Activity,
    },
    Feature {
        title: "Field Notes & Mobile",
        desc: "Seamless field data entry and simplified mobile views for on-the-go ground validation.",
        icon: Icon::Smartphone,
    },
    Feature {
        title: "Data Export",
        desc: "Automated generation of PNG maps, CSV datasets, and analytical PDF reports for documentation.",
        icon: Icon::FileText,
    },
];

pub struct ProcessStep {
    pub step: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { step: "01", label: "Data Acquisition", desc: "Sentinel-2 & ERA5 ingestion" },
    ProcessStep { step: "02", label: "Model Training", desc: "Feature extraction & ML processing" },
    ProcessStep { step: "03", label: "Predictive Insight", desc: "Stress forecasting & risk analysis" },
    ProcessStep { step: "04", label: "Operational Decision", desc: "In-field irrigation management" },
];

pub const FOOTER_BLURB: &str =
    "Advanced agro-environmental data science for sustainable viticulture and water resource management.";
pub const FOOTER_COURSE: &str = "Fundamentals of Agro-Environmental Data Science (FADS)";
pub const FOOTER_TAGS: &[&str] = &["© 2026 Academic Project", "Mediterranean Agriculture"];
pub const FOOTER_STATEMENT: &str =
    "“This website constitutes the official project presentation for the FADS Assignment 02, as agreed with the course instructor.”";

pub struct Image {
    pub file: &'static str,
    pub alt: &'static str,
}

pub const HERO_IMAGE: Image = Image { file: "vitis-hero.png", alt: "VITIs Dashboard Mockup" };
pub const LANDSCAPE_IMAGE: Image = Image { file: "vineyard-landscape.jpg", alt: "Mediterranean Vineyard Landscape" };
pub const FOREST_IMAGE: Image = Image { file: "forest-light.jpg", alt: "Visual Context" };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_target_page_anchors() {
        assert_eq!(NAV_LINKS.len(), 4);
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn section_sizes_match_layout() {
        assert_eq!(DATA_SOURCES.len(), 3);
        assert_eq!(METHOD_STEPS.len(), 3);
        assert_eq!(IMPACTS.len(), 4);
        assert_eq!(FEATURES.len(), 4);
    }

    #[test]
    fn data_sources_use_expected_icons() {
        let icons: Vec<&str> = DATA_SOURCES.iter().map(|d| d.icon.label()).collect();
        assert_eq!(icons, vec!["Map", "CloudSun", "Database"]);
    }

    #[test]
    fn images_are_plain_file_names() {
        for image in [&HERO_IMAGE, &LANDSCAPE_IMAGE, &FOREST_IMAGE] {
            assert!(!image.file.contains('/'));
            assert!(!image.alt.is_empty());
        }
    }
}
