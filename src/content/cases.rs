use super::{facts, shared, CaseDetail, Localized, ProjectKey};

static LEM: CaseDetail = CaseDetail {
    summary: Localized::Split {
        es: "Logística en Miami y envíos internacionales (Uruguay + Argentina). Landing mobile-first, multipaís y contacto con Resend.",
        en: "Logistics in Miami and international shipping (Uruguay + Argentina). Mobile-first, multi-country landing with Resend contact.",
    },
    stack: shared(&[
        "Frontend: Next.js 15 + TypeScript + Tailwind",
        "Hosting: Vercel",
        "Integraciones: WhatsApp · Instagram · Email (Resend)",
        "Roadmap multipaís: lem-box.com (selector), lem-box.com.uy, lem-box.com.ar",
    ]),
    integrations: shared(&["Resend (email)", "WhatsApp", "Instagram"]),
    challenges: facts(
        &[
            "Crear un sitio de logística con estética premium (Apple-like) en un rubro tradicional",
            "Alinear branding digital con la operativa real de un warehouse en Miami",
            "Optimizar tiempos de carga y experiencia mobile",
        ],
        &[
            "Build a premium (Apple-like) logistics site in a traditional industry",
            "Align digital branding with the real Miami warehouse operations",
            "Optimize load times and mobile UX",
        ],
    ),
    solution: facts(
        &[
            "Diseño consistente y minimalista con colores corporativos (#02120F y #EB6619)",
            "Flujo de navegación claro: landing → contacto → WhatsApp/email",
            "Implementación de arquitectura multipaís (selector + sitios locales)",
            "SEO optimizado para Uruguay y Argentina",
        ],
        &[
            "Consistent, minimal design with brand colors (#02120F and #EB6619)",
            "Clear navigation flow: landing → contact → WhatsApp/email",
            "Multi-country architecture (selector + local sites)",
            "SEO optimized for Uruguay and Argentina",
        ],
    ),
    results: facts(
        &[
            "Primera versión productiva en Uruguay lista para producción",
            "Roadmap claro para expansión regional",
            "Sitio rápido, responsive y con identidad propia, diferenciado de la competencia",
        ],
        &[
            "First productive version for Uruguay, ready for production",
            "Clear roadmap for regional expansion",
            "Fast, responsive site with its own identity",
        ],
    ),
};

static ESTEBAN: CaseDetail = CaseDetail {
    summary: Localized::Split {
        es: "Sitio inmobiliario para preconstrucción en Miami. Incluye catálogo dinámico de proyectos, galerías, planos de pago, fichas multilenguaje (ES/EN), integración con WhatsApp y optimización SEO.",
        en: "Real‑estate site for Miami preconstruction. Dynamic project catalog, galleries, payment plans, ES/EN pages, WhatsApp integration and SEO optimization.",
    },
    stack: shared(&[
        "Frontend: Next.js 15 (App Router) + TypeScript + Tailwind",
        "Multilenguaje: next-intl (ES/EN)",
        "Deploy: Vercel",
        "Sistema de diseño reutilizable (componentes React, Navy + Gold)",
    ]),
    integrations: shared(&[
        "ImageKit (imágenes optimizadas de proyectos)",
        "Google Maps embebido",
        "WhatsApp (botones de contacto)",
        "Google Calendar (agendar reunión)",
    ]),
    challenges: facts(
        &[
            "Gestionar +40 proyectos con fichas independientes",
            "Mantener diseño mobile-first, estética Apple-like y branding de Esteban",
            "SEO específico por proyecto (og:image, meta, descripción)",
        ],
        &[
            "+40 independent project pages",
            "Mobile-first design with Apple-like aesthetic and brand consistency",
            "Per‑project SEO (og:image, meta, description)",
        ],
    ),
    solution: facts(
        &[
            "Estructura modular (.tsx por proyecto) con data centralizada",
            "Bloques reutilizables (Highlights, Specs, PaymentPlan, FAQs, Ubicación)",
            "Integración continua con Vercel para despliegues rápidos",
        ],
        &[
            "Modular structure (.tsx per project) with centralized data",
            "Reusable blocks (Highlights, Specs, PaymentPlan, FAQs, Location)",
            "Vercel integration for fast deployments",
        ],
    ),
    results: facts(
        &[
            "Web veloz y optimizada (First Load < 2.5s)",
            "Posicionamiento con metatags custom por proyecto",
            "Catálogo escalable para sumar nuevos desarrollos",
            "Herramienta comercial activa para captar inversores",
        ],
        &[
            "Fast, optimized site (First Load < 2.5s)",
            "Per‑project custom metatags for SEO",
            "Scalable catalog for new developments",
            "Active sales tool to capture investors",
        ],
    ),
};

static MUTTER: CaseDetail = CaseDetail {
    summary: Localized::Split {
        es: "Tienda online de videojuegos, consolas y coleccionables con catálogo dinámico, carrito y checkout integrado con Mercado Pago, panel admin completo y reglas de seguridad en Firebase.",
        en: "Online store for videogames, consoles and collectibles with dynamic catalog, cart and Mercado Pago checkout, full admin panel and hardened Firebase security rules.",
    },
    stack: shared(&[
        "Frontend: React + Vite + TypeScript",
        "State & UX: React Context (Auth/Cart) + Framer Motion",
        "Backend admin: Vercel Serverless Functions + Firebase Admin SDK",
        "Firebase: Firestore · Authentication · Hosting · Storage",
        "Security: Custom Claims (admin / superadmin) + Firestore Rules",
        "Testing: Vitest · Playwright · Firestore Rules Testing",
        "Admin panel: React (users, roles, products, categorías, clientes)",
    ]),
    integrations: shared(&[
        "Mercado Pago (Checkout Pro)",
        "ImageKit/Cloudinary (media optimizada)",
        "Integración de envíos",
        "Firebase Auth + Firestore",
        "Vercel Functions (API admin)",
    ]),
    challenges: facts(
        &[
            "Implementar un checkout LATAM robusto con múltiples métodos de pago y flujo de órdenes seguro.",
            "Sincronizar carritos anónimos y usuarios registrados sin duplicar información ni perder contexto.",
            "Diseñar un panel admin completo con control de permisos, roles (admin/superadmin) y seguridad en Firebase.",
            "Separar frontend público de API admin para que ningún write crítico vaya directo desde el cliente a Firestore.",
        ],
        &[
            "Implement a robust LATAM checkout with multiple payment methods and a secure order flow.",
            "Sync guest carts and logged‑in users without data duplication or losing context.",
            "Design a full admin panel with permissions, roles (admin/superadmin) and Firebase‑backed security.",
            "Separate public frontend from admin API so no critical writes go directly from client to Firestore.",
        ],
    ),
    solution: facts(
        &[
            "SDK de pagos de Mercado Pago con notificaciones en tiempo real y creación de órdenes desde backend admin.",
            "Catálogo tipado, filtros dinámicos y sincronización del carrito entre usuario anónimo y autenticado.",
            "API admin en Vercel con Firebase Admin SDK, verificación de tokens, Custom Claims y Firestore Rules específicas.",
            "Panel de administración modular para gestionar productos, stock, categorías, subcategorías, clientes y usuarios admin.",
        ],
        &[
            "Mercado Pago SDK with real‑time notifications and order creation handled by the admin backend.",
            "Typed catalog, dynamic filters and cart synchronization between guest and authenticated users.",
            "Admin API on Vercel with Firebase Admin SDK, token verification, Custom Claims and dedicated Firestore security rules.",
            "Modular admin panel to manage products, stock, categories, subcategories, customers and admin users.",
        ],
    ),
    results: facts(
        &[
            "Rendimiento optimizado con Vite (LCP ~2.1s) y navegación fluida.",
            "Conversión mejorada gracias a un flujo de checkout claro, confiable y adaptado a métodos de pago regionales.",
            "Panel de administración que facilita la gestión integral sin conocimientos técnicos, con roles y permisos claros.",
            "Arquitectura lista para escalar como white‑label store, con backend seguro y suite de tests automatizada.",
        ],
        &[
            "Optimized performance with Vite (LCP ~2.1s) and smooth navigation.",
            "Higher conversion thanks to a clear, trustworthy checkout flow tailored to regional payment methods.",
            "Admin panel that streamlines operations without technical expertise, with clear roles and permissions.",
            "Architecture ready to scale as a white‑label store, with a secure backend and automated test suite.",
        ],
    ),
};

static FEDERICO: CaseDetail = CaseDetail {
    summary: Localized::Split {
        es: "Sitio web personal y profesional del campeón mundial de kickboxing y muay thai. Incluye biografía, cursos en video, galería multimedia y testimonios reales de alumnos.",
        en: "Personal and professional website for a Muay Thai & kickboxing world champion. Includes bio, video courses, media gallery and real student testimonials.",
    },
    stack: shared(&[
        "Frontend: React + Vite + TypeScript",
        "Animaciones: Framer Motion",
        "Firebase: Firestore · Auth · Hosting · Storage",
        "i18n: i18next (ES/EN)",
    ]),
    integrations: shared(&[
        "Vimeo (video courses)",
        "Cloudinary/ImageKit (optimized gallery)",
        "WhatsApp CTA",
        "SEO dinámico por sección",
    ]),
    challenges: facts(
        &[
            "Sitio moderno pero liviano, accesible y administrable sin CMS",
            "Adaptar contenido extenso (biografía, clases, testimonios) sin saturar al usuario",
            "Experiencia mobile‑first fluida y visualmente clara",
            "Sistema de testimonios dinámicos, ordenados y con traducciones",
        ],
        &[
            "Modern yet lightweight site, accessible and CMS‑less",
            "Adapt long‑form content (bio, classes, testimonials) without overwhelming users",
            "Smooth mobile‑first UX with clear visual hierarchy",
            "Dynamic, translated testimonials system",
        ],
    ),
    solution: facts(
        &[
            "Secciones por bloques reutilizables (Hero, Sobre mí, Galería, Clases, Testimonios, Contacto)",
            "Contenido multilenguaje centralizado (es.json / en.json)",
            "Testimonios escalables con tipado central y carga desde testimonialsData.ts",
            "Galería multimedia con hovers, fullscreen y CTA",
            "Enlaces limpios, SEO on‑page y metadatos por página",
        ],
        &[
            "Reusable blocks (Hero, About, Gallery, Classes, Testimonials, Contact)",
            "Centralized i18n content (es.json / en.json)",
            "Scalable testimonials with typed schema and data loader",
            "Media gallery with hovers, fullscreen and CTA",
            "Clean URLs, on‑page SEO and per‑page metadata",
        ],
    ),
    results: facts(
        &[
            "Mayor profesionalismo y claridad para sponsors y academias",
            "Plataforma lista para vender cursos (estructura de video + catálogo)",
            "Menor rebote gracias al orden por secciones y CTA activos",
            "Más consultas vía WhatsApp en mobile",
        ],
        &[
            "More professional and clear positioning for sponsors and academies",
            "Course‑ready platform (video structure + catalog)",
            "Lower bounce thanks to clear sections and active CTAs",
            "More WhatsApp inquiries on mobile",
        ],
    ),
};

static BIONOVA: CaseDetail = CaseDetail {
    summary: Localized::Split {
        es: "Tienda online profesional en EE.UU. para venta de suplementos (ES/EN). Variantes por producto (60/120 caps), precios diferenciados, stock real, checkout con Stripe/PayPal y panel de administración.",
        en: "Professional US‑based supplements store (ES/EN). Product variants (60/120 caps), tiered pricing, real stock, Stripe/PayPal checkout and an admin dashboard.",
    },
    stack: shared(&[
        "Frontend: React + Vite + TypeScript",
        "Firebase: Firestore · Auth · Hosting · Storage",
        "i18n: i18next",
        "Rich content: TipTap (descripciones)",
    ]),
    integrations: shared(&[
        "Stripe (Elements/Checkout)",
        "PayPal Buttons",
        "ImageKit/Cloudinary (medios optimizados)",
    ]),
    challenges: facts(
        &[
            "Gestionar variantes con stock y precios por variante",
            "Checkout real para EE.UU. (Stripe/PayPal)",
            "Migración y optimización de imágenes (ImageKit)",
            "SEO on‑page y datos abiertos en multilenguaje",
        ],
        &[
            "Variant management with per‑variant stock & pricing",
            "Real US checkout (Stripe/PayPal)",
            "Image migration & optimization (ImageKit)",
            "Multilingual on‑page SEO & Open Graph",
        ],
    ),
    solution: facts(
        &[
            "Modelo de producto tipado con variantes y stock",
            "Stripe Elements + PayPal integrados en el flujo de compra",
            "Pipeline de medios con transformaciones en CDN (ImageKit)",
            "Editor enriquecido TipTap y metadatos por página",
        ],
        &[
            "Typed product model with variants & stock",
            "Stripe Elements + PayPal integrated in the checkout flow",
            "Media pipeline with CDN transforms (ImageKit)",
            "TipTap rich editor and per‑page metadata",
        ],
    ),
    results: facts(
        &[
            "UX más rápida y clara",
            "Menos fricción en el pago (Stripe/PayPal)",
            "Administración centralizada de catálogo y pedidos",
        ],
        &[
            "Faster, clearer UX",
            "Lower payment friction (Stripe/PayPal)",
            "Centralized catalog & orders management",
        ],
    ),
};

static MAGENTA: CaseDetail = CaseDetail {
    summary: Localized::Split {
        es: "MVP funcional para una imprenta con 15 años de trayectoria. Incluye catálogo optimizado con mockups generados por IA, formulario dinámico de presupuestos y arquitectura moderna con Next.js 16.",
        en: "Functional MVP for a print shop with 15 years of experience. Includes an optimized catalog with AI-generated mockups, a dynamic quote form and a modern architecture with Next.js 16.",
    },
    stack: facts(
        &[
            "Frontend: Next.js 16 (App Router) + TypeScript + TailwindCSS",
            "Infraestructura: Vercel (deploy continuo)",
            "Optimización SEO: metadata personalizada, OG automáticas, sitemap.xml y robots.txt",
            "Automatización: generación de imágenes con IA (Sora/OpenAI)",
            "Diseño: mockups personalizados + UI modular",
            "Gestión de datos: estructuras centralizadas en /src/data",
        ],
        &[
            "Frontend: Next.js 16 (App Router) + TypeScript + TailwindCSS",
            "Infrastructure: Vercel (continuous deploy)",
            "SEO optimization: custom metadata, automatic OG, sitemap.xml and robots.txt",
            "Automation: AI image generation with Sora/OpenAI",
            "Design: custom mockups + modular UI",
            "Data management: centralized structures in /src/data",
        ],
    ),
    integrations: facts(
        &[
            "Mockups personalizados generados por IA (Sora)",
            "Formularios dinámicos por servicio",
            "WhatsApp API para contacto inmediato",
            "Mapa de ubicación embebido",
            "Carrusel automático de marcas/clientes",
            "Favicon y OG card personalizada para redes sociales",
        ],
        &[
            "Custom AI-generated mockups (Sora)",
            "Service-based dynamic forms",
            "WhatsApp API for instant contact",
            "Embedded location map",
            "Automatic brand/client carousel",
            "Custom favicon and OG card for social media",
        ],
    ),
    challenges: facts(
        &[
            "Organizar información comercial diversa (servicios, productos, catálogo, presupuesto) en una estructura clara y escalable.",
            "Diseñar una experiencia fluida que funcione igual de bien en desktop y mobile.",
            "Optimizar la carga inicial y el SEO para un negocio local (posicionamiento por ciudad y rubro).",
            "Crear un formulario flexible capaz de adaptarse a distintos servicios sin repetir lógica.",
        ],
        &[
            "Organize diverse commercial information (services, products, catalog, quotes) in a clear and scalable structure.",
            "Design a smooth experience that works equally well on desktop and mobile.",
            "Optimize initial load and SEO for a local business (city and industry targeting).",
            "Build a flexible form that adapts to different services without duplicating logic.",
        ],
    ),
    solution: facts(
        &[
            "Arquitectura modular con componentes server/client correctamente separados.",
            "Catálogo de productos y servicios centralizado en estructuras de datos (src/data).",
            "Formularios dinámicos basados en reglas por servicio (libretas, tarjetas, afiches, etc.).",
            "Diseño limpio estilo Apple minimal con foco en claridad y velocidad de acceso.",
            "Optimización SEO completa (metadata, OG card, sitemap, robots).",
            "Deploy automatizado en Vercel con imágenes optimizadas.",
        ],
        &[
            "Modular architecture with proper separation between server and client components.",
            "Centralized product and service catalog in reusable data structures (src/data).",
            "Dynamic forms driven by per-service rules (notebooks, cards, posters, etc.).",
            "Clean Apple-like minimal design focused on clarity and fast access.",
            "Full SEO optimization (metadata, OG card, sitemap, robots).",
            "Automated deployment on Vercel with optimized images.",
        ],
    ),
    results: facts(
        &[
            "Web rápida y confiable para un negocio local con mucha competencia.",
            "Mejor experiencia de usuario para pedidos de presupuesto (menos fricción).",
            "Imagen profesional consistente con la marca Magenta.",
            "Catálogo visual con mockups de alta calidad que elevan el branding.",
            "Preparado para futuras expansiones: e-commerce, panel administrativo, etc.",
        ],
        &[
            "Fast and reliable website for a local business in a competitive market.",
            "Better user experience for quote requests (less friction).",
            "Professional image consistent with the Magenta brand.",
            "Visual catalog with high-quality mockups that elevate the branding.",
            "Ready for future expansions: e-commerce, admin panel, etc.",
        ],
    ),
};

static BOATING: CaseDetail = CaseDetail {
    summary: Localized::Split {
        es: "Sitio de servicios con reservas y WhatsApp directo.",
        en: "Service site with bookings and direct WhatsApp.",
    },
    stack: shared(&["React"]),
    integrations: shared(&["WhatsApp", "Maps"]),
    challenges: facts(&["SEO local", "Reservas"], &["Local SEO", "Bookings"]),
    solution: facts(&["Páginas optimizadas", "CTA claros"], &["Optimized pages", "Clear CTAs"]),
    results: facts(&["Más leads", "Mejor visibilidad"], &["More leads", "Better visibility"]),
};

/// Case study for a project.
pub fn detail(key: ProjectKey) -> &'static CaseDetail {
    match key {
        ProjectKey::Magenta => &MAGENTA,
        ProjectKey::Esteban => &ESTEBAN,
        ProjectKey::Lem => &LEM,
        ProjectKey::Mutter => &MUTTER,
        ProjectKey::Federico => &FEDERICO,
        ProjectKey::Bionova => &BIONOVA,
        ProjectKey::Boating => &BOATING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn untranslated_stacks_fall_back_to_the_shared_list() {
        let lem = detail(ProjectKey::Lem);
        assert_eq!(lem.stack.get(Locale::Es), lem.stack.get(Locale::En));
        assert_eq!(lem.stack.get(Locale::En)[1], "Hosting: Vercel");
    }

    #[test]
    fn magenta_has_translated_stack() {
        let magenta = detail(ProjectKey::Magenta);
        assert_eq!(
            magenta.stack.get(Locale::En)[1],
            "Infrastructure: Vercel (continuous deploy)"
        );
        assert_eq!(
            magenta.stack.get(Locale::Es)[1],
            "Infraestructura: Vercel (deploy continuo)"
        );
    }
}
