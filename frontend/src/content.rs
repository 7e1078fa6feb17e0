//! Static copy for the page. Presentation-only data; the state machines in
//! `site-core` never read it.

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Short description shown under the target in the menu overlay.
    pub blurb: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: "hero",
        label: "Inicio",
        blurb: "Portada y manifiesto de diseño.",
    },
    NavItem {
        id: "catalogo",
        label: "Catálogo",
        blurb: "Selección curada de proyectos insignia.",
    },
    NavItem {
        id: "proceso",
        label: "Proceso",
        blurb: "Metodología, rigor y materiales nobles.",
    },
    NavItem {
        id: "sobre",
        label: "Sobre",
        blurb: "Firma, filosofía y equipo núcleo.",
    },
    NavItem {
        id: "contacto",
        label: "Contacto",
        blurb: "Coordinemos tu próxima obra.",
    },
];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static PROJECTS: [Project; 5] = [
    Project {
        id: "victorian",
        title: "Casa victoriana de ladrillo y precast",
        description: "Restauración precisa con ladrillo artesanal y piezas de precast que afinan molduras y proporciones.",
        image: "victorian.png",
    },
    Project {
        id: "bauhaus",
        title: "Casa bauhaus con un pilar de piedra natural",
        description: "Volúmenes geométricos, un pilar monolítico de piedra y huecos calibrados para luz constante.",
        image: "bauhaus.png",
    },
    Project {
        id: "cyclopean",
        title: "Chalet ciclópeo de piedra cobblestone",
        description: "Envolvente de piedra ciclópea tallada a mano, aleros largos y luminarias empotradas invisibles.",
        image: "cyclopean-chalet.png",
    },
    Project {
        id: "wave-wall",
        title: "Muro comercial con olas de ladrillo prefabricado",
        description: "Fachada serpenteante de módulos prefabricados que generan textura y sombra dinámica.",
        image: "wave-wall.png",
    },
    Project {
        id: "french-townhouses",
        title: "Townhouses franceses con paneles precast",
        description: "Serie de adosadas con ritmo parisino, paneles art nouveau y herrería a medida.",
        image: "french-townhouses.png",
    },
];

pub struct ProcessStep {
    pub title: &'static str,
    pub text: &'static str,
}

pub static PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        title: "Brief de precisión",
        text: "Definimos usos, atmósferas y materialidad con maquetas de luz y recorridos VR para eliminar dudas tempranas.",
    },
    ProcessStep {
        title: "Ingeniería integrada",
        text: "Estructura, envolvente, HVAC y domótica coordinadas en un solo modelo. Menos reprocesos, más control.",
    },
    ProcessStep {
        title: "Obra supervisada",
        text: "Site managers residentes, materiales trazables y reportes semanales con fotos, métricas y avance financiero.",
    },
];

pub struct ChatMessage {
    pub from_bot: bool,
    pub text: &'static str,
}

/// The scripted exchange shown by the chat widget. Nothing is ever sent
/// anywhere; this is canned marketing copy.
pub static CHAT_SCRIPT: [ChatMessage; 3] = [
    ChatMessage {
        from_bot: true,
        text: "Hola, soy el mapache de obra. ¿Qué quieres construir?",
    },
    ChatMessage {
        from_bot: false,
        text: "Busco una casa de líneas limpias y materiales nobles.",
    },
    ChatMessage {
        from_bot: true,
        text: "Perfecto. Podemos empezar con una visita técnica esta semana.",
    },
];
