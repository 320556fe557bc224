//! Hand-picked projects for the landing section.
//!
//! This list is curated on its own and does not follow the portfolio's
//! membership or categories; adding a project to [`super::PROJECTS`] does
//! not put it here.

use super::{Localized, ProjectKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub key: ProjectKey,
    pub logo: &'static str,
    pub summary: Localized<&'static str>,
}

pub static HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        key: ProjectKey::Esteban,
        logo: "/img/esteban.jpg",
        summary: Localized::Split {
            es: "Real estate · Landing, catálogo y SEO técnico para captar leads de preconstrucción.",
            en: "Real estate · Landing, catalog and technical SEO to capture pre-construction leads.",
        },
    },
    Highlight {
        key: ProjectKey::Lem,
        logo: "/img/lem-box-cover.jpg",
        summary: Localized::Split {
            es: "Logística internacional · Web a medida e integraciones para gestionar envíos y clientes.",
            en: "International logistics · Custom site and integrations to manage shipments and customers.",
        },
    },
    Highlight {
        key: ProjectKey::Mutter,
        logo: "/img/mutter-cover.jpg",
        summary: Localized::Split {
            es: "E‑commerce de videojuegos · Catálogo dinámico y checkout integrado para aumentar ventas.",
            en: "Video‑games e‑commerce · Dynamic catalog and integrated checkout to drive sales.",
        },
    },
];
