use super::{facts, shared, Category, Localized, ProjectCopy, ProjectKey, ProjectMetadata, ProjectRecord};

/// Every project, in canonical listing order.
pub static PROJECTS: [ProjectRecord; 7] = [
    ProjectRecord {
        key: ProjectKey::Magenta,
        href: "https://magenta-paysandu-m5in.vercel.app",
        cover: "/img/magenta-cover.svg",
    },
    ProjectRecord {
        key: ProjectKey::Esteban,
        href: "https://estebanfirpo.com",
        cover: "/img/esteban.jpg",
    },
    ProjectRecord {
        key: ProjectKey::Lem,
        href: "https://lem-box.com.uy",
        cover: "/img/lem-box-cover.jpg",
    },
    ProjectRecord {
        key: ProjectKey::Mutter,
        href: "https://www.muttergames.com",
        cover: "/img/mutter-cover.jpg",
    },
    ProjectRecord {
        key: ProjectKey::Federico,
        href: "https://www.federicoroma.com",
        cover: "/img/federico-cover.jpg",
    },
    ProjectRecord {
        key: ProjectKey::Bionova,
        href: "https://www.getbionova.com",
        cover: "/img/bionova-cover.jpg",
    },
    ProjectRecord {
        key: ProjectKey::Boating,
        href: "https://www.boatingadventuresmiami.com",
        cover: "/img/Fondo.jpg",
    },
];

static LEM_META: ProjectMetadata = ProjectMetadata {
    category: Category::Services,
    tags: facts(&["Logística", "Next.js"], &["Logistics", "Next.js"]),
};

static ESTEBAN_META: ProjectMetadata = ProjectMetadata {
    category: Category::Services,
    tags: shared(&["Real Estate", "Next.js"]),
};

static MUTTER_META: ProjectMetadata = ProjectMetadata {
    category: Category::Ecom,
    tags: shared(&["E‑commerce", "Mercado Pago"]),
};

static FEDERICO_META: ProjectMetadata = ProjectMetadata {
    category: Category::Personal,
    tags: facts(&["Marca personal", "Cursos"], &["Personal brand", "Courses"]),
};

static BIONOVA_META: ProjectMetadata = ProjectMetadata {
    category: Category::Ecom,
    tags: shared(&["E‑commerce", "Stripe/PayPal"]),
};

static MAGENTA_META: ProjectMetadata = ProjectMetadata {
    category: Category::Services,
    tags: facts(&["Imprenta", "Next.js"], &["Print shop", "Next.js"]),
};

static BOATING_META: ProjectMetadata = ProjectMetadata {
    category: Category::Services,
    tags: facts(&["Servicios", "Reservas"], &["Services", "Bookings"]),
};

/// Category and tags for a project.
pub fn metadata(key: ProjectKey) -> &'static ProjectMetadata {
    match key {
        ProjectKey::Magenta => &MAGENTA_META,
        ProjectKey::Esteban => &ESTEBAN_META,
        ProjectKey::Lem => &LEM_META,
        ProjectKey::Mutter => &MUTTER_META,
        ProjectKey::Federico => &FEDERICO_META,
        ProjectKey::Bionova => &BIONOVA_META,
        ProjectKey::Boating => &BOATING_META,
    }
}

const VISIT: Localized<&str> = Localized::Split {
    es: "Visitar sitio",
    en: "Visit site",
};

static MAGENTA_COPY: ProjectCopy = ProjectCopy {
    title: "Magenta Imprenta",
    description: Localized::Split {
        es: "Imprenta en Paysandú: catálogo de productos, mockups y presupuestos online.",
        en: "Print shop in Paysandú: product catalog, mockups and online quotes.",
    },
    link: VISIT,
};

static ESTEBAN_COPY: ProjectCopy = ProjectCopy {
    title: "Esteban Firpo Real Estate",
    description: Localized::Split {
        es: "Preconstrucción en Miami con fichas por proyecto, planes de pago y contacto directo.",
        en: "Miami preconstruction with per-project pages, payment plans and direct contact.",
    },
    link: VISIT,
};

static LEM_COPY: ProjectCopy = ProjectCopy {
    title: "LEM Box",
    description: Localized::Split {
        es: "Casillero en Miami y envíos a Uruguay y Argentina.",
        en: "Miami mailbox and shipping to Uruguay and Argentina.",
    },
    link: VISIT,
};

static MUTTER_COPY: ProjectCopy = ProjectCopy {
    title: "Mutter Games",
    description: Localized::Split {
        es: "Tienda de videojuegos, consolas y coleccionables con checkout Mercado Pago.",
        en: "Videogames, consoles and collectibles store with Mercado Pago checkout.",
    },
    link: VISIT,
};

static FEDERICO_COPY: ProjectCopy = ProjectCopy {
    title: "Federico Roma",
    description: Localized::Split {
        es: "Marca personal de un campeón mundial de muay thai y kickboxing.",
        en: "Personal brand for a Muay Thai and kickboxing world champion.",
    },
    link: VISIT,
};

static BIONOVA_COPY: ProjectCopy = ProjectCopy {
    title: "BioNova",
    description: Localized::Split {
        es: "Suplementos en EE.UU. con variantes, stock real y pagos Stripe/PayPal.",
        en: "US supplements store with variants, real stock and Stripe/PayPal payments.",
    },
    link: VISIT,
};

static BOATING_COPY: ProjectCopy = ProjectCopy {
    title: "Boating Adventures Miami",
    description: Localized::Split {
        es: "Paseos en barco por Miami con reservas y WhatsApp directo.",
        en: "Miami boat tours with bookings and direct WhatsApp.",
    },
    link: VISIT,
};

/// Card copy for a project.
pub fn copy(key: ProjectKey) -> &'static ProjectCopy {
    match key {
        ProjectKey::Magenta => &MAGENTA_COPY,
        ProjectKey::Esteban => &ESTEBAN_COPY,
        ProjectKey::Lem => &LEM_COPY,
        ProjectKey::Mutter => &MUTTER_COPY,
        ProjectKey::Federico => &FEDERICO_COPY,
        ProjectKey::Bionova => &BIONOVA_COPY,
        ProjectKey::Boating => &BOATING_COPY,
    }
}
