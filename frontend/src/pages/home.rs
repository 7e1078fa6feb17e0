use yew::prelude::*;

use site_core::Theme;

use crate::components::chat_widget::ChatWidget;
use crate::components::header::Header;
use crate::components::section::Section;
use crate::config;
use crate::content::{PROCESS_STEPS, PROJECTS};
use crate::hooks::active_section::use_active_section;

const GLOBAL_STYLE: &str = r#"
    :root {
        --ink-light: #f1f5f9;
        --ink-dark: #0f172a;
        --accent: #7dd3fc;
    }
    body {
        margin: 0;
        background: #05070d;
        color: var(--ink-light);
        font-family: 'Manrope', system-ui, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    .page-shell {
        max-width: 72rem;
        margin: 0 auto;
        padding: 7rem 1.5rem 6rem;
        display: flex;
        flex-direction: column;
        gap: 8rem;
    }
    .glass-panel {
        background: linear-gradient(135deg, rgba(255,255,255,0.12), rgba(255,255,255,0.02));
        border: 1px solid rgba(255,255,255,0.2);
        backdrop-filter: blur(16px);
    }
    .glass-button {
        border: 1px solid rgba(255,255,255,0.25);
        border-radius: 9999px;
        background: rgba(255,255,255,0.05);
        color: inherit;
        padding: 0.5rem 1.25rem;
        cursor: pointer;
        transition: border-color 0.2s ease;
    }
    .glass-button:hover { border-color: rgba(255,255,255,0.45); }
    .ink-light { color: var(--ink-light); }
    .ink-dark { color: var(--ink-dark); }

    .site-header {
        position: fixed;
        inset: 0 0 auto 0;
        z-index: 40;
        border-bottom: 1px solid transparent;
        transition: background 0.5s ease, border-color 0.5s ease;
    }
    .site-header.glassy {
        backdrop-filter: blur(24px);
        background: rgba(255,255,255,0.05);
        border-bottom-color: rgba(255,255,255,0.1);
    }
    .header-content {
        max-width: 72rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .brand { display: flex; align-items: center; gap: 0.75rem; }
    .brand-roundel {
        width: 2.75rem; height: 2.75rem;
        border-radius: 9999px;
        display: flex; align-items: center; justify-content: center;
        font-weight: 600;
    }
    .brand-name { margin: 0; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.2em; }
    .brand-tagline { margin: 0; font-size: 0.75rem; color: #cbd5e1; }
    .desktop-nav { display: none; align-items: center; gap: 1.5rem; }
    @media (min-width: 768px) {
        .desktop-nav { display: flex; }
        .menu-button { display: none; }
    }
    .nav-link {
        position: relative;
        font-size: 0.9rem;
        font-weight: 500;
        text-decoration: none;
        opacity: 0.6;
        transition: opacity 0.2s ease, color 0.2s ease;
    }
    .nav-link:hover { opacity: 0.9; }
    .nav-link.active { opacity: 1; }
    .nav-underline {
        position: absolute;
        left: 0; right: 0; bottom: -0.5rem;
        height: 2px;
        border-radius: 9999px;
        background: var(--accent);
    }

    .menu-overlay {
        position: fixed; inset: 0; z-index: 30;
        background: linear-gradient(to bottom, rgba(0,0,0,0.6), rgba(0,0,0,0.4), rgba(0,0,0,0.7));
        backdrop-filter: blur(32px);
        animation: overlay-in 0.25s ease;
    }
    @keyframes overlay-in { from { opacity: 0; } to { opacity: 1; } }
    .menu-panel {
        max-width: 56rem;
        margin: 6rem auto 0;
        border-radius: 1.5rem;
        padding: 2rem;
        color: white;
        animation: panel-in 0.35s ease-out;
    }
    @keyframes panel-in {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .menu-panel-header { display: flex; align-items: center; justify-content: space-between; }
    .menu-kicker {
        margin: 0; font-size: 0.85rem;
        text-transform: uppercase; letter-spacing: 0.22em;
        color: rgba(226,232,240,0.8);
    }
    .menu-title { margin: 0; font-size: 1.9rem; font-weight: 600; }
    .menu-grid { display: grid; gap: 1rem; margin-top: 1.5rem; }
    @media (min-width: 768px) { .menu-grid { grid-template-columns: 1fr 1fr; } }
    .menu-item {
        display: block;
        border: 1px solid rgba(255,255,255,0.1);
        border-radius: 1rem;
        background: rgba(255,255,255,0.05);
        padding: 1rem 1.25rem;
        color: #e2e8f0;
        text-decoration: none;
        transition: border-color 0.2s ease;
    }
    .menu-item:hover { border-color: rgba(255,255,255,0.3); }
    .menu-item.active { border-color: rgba(255,255,255,0.3); color: white; }
    .menu-item-row { display: flex; align-items: center; justify-content: space-between; }
    .menu-item-label { font-size: 1.1rem; font-weight: 500; }
    .menu-item-index { font-size: 0.75rem; text-transform: uppercase; color: rgba(203,213,225,0.8); }
    .menu-item-blurb { margin: 0.5rem 0 0; font-size: 0.9rem; color: rgba(203,213,225,0.8); }

    .section-shell { position: relative; width: 100%; scroll-margin-top: 6rem; }
    .section-kicker {
        margin: 0; font-size: 0.85rem;
        text-transform: uppercase; letter-spacing: 0.24em;
    }
    .section-title { margin: 0.5rem 0 0; font-size: 1.9rem; font-weight: 600; }
    .section-lede { max-width: 48rem; font-size: 1.1rem; }

    .hero-grid { display: grid; gap: 3rem; align-items: center; }
    @media (min-width: 1024px) { .hero-grid { grid-template-columns: 1fr 1fr; } }
    .hero-badge {
        display: inline-flex; align-items: center; gap: 0.5rem;
        border: 1px solid rgba(255,255,255,0.15);
        border-radius: 9999px;
        padding: 0.5rem 1rem;
        font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.25em;
        color: rgba(226,232,240,0.8);
    }
    .hero-title { font-size: clamp(2.5rem, 5vw, 3.75rem); line-height: 1.15; margin: 1.5rem 0; }
    .hero-lede { max-width: 36rem; font-size: 1.15rem; color: rgba(226,232,240,0.9); }
    .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }
    .hero-tags { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; font-size: 0.9rem; color: rgba(203,213,225,0.9); }
    .hero-tag { display: flex; align-items: center; gap: 0.5rem; }
    .hero-tag::before {
        content: '';
        width: 0.5rem; height: 0.5rem; border-radius: 9999px;
        background: var(--accent);
        display: inline-block;
    }
    .hero-figure { position: relative; height: 30rem; overflow: hidden; border-radius: 1rem; }
    .hero-figure img { width: 100%; height: 100%; object-fit: cover; }
    .hero-caption {
        position: absolute; left: 1rem; bottom: 1rem;
        border-radius: 9999px; padding: 0.5rem 1rem;
        font-size: 0.75rem;
    }

    .catalog-section {
        border-radius: 1.5rem;
        background: linear-gradient(to bottom, #f1f5f9, #f8fafc);
        color: var(--ink-dark);
        padding: 2.5rem 1.5rem;
        box-shadow: 0 20px 60px rgba(0,0,0,0.25);
    }
    .catalog-grid { display: grid; gap: 2rem; }
    @media (min-width: 768px) { .catalog-grid { grid-template-columns: 1fr 1fr; } }
    .project-card { background: white; overflow: hidden; border-radius: 0.75rem; }
    .project-card img {
        width: 100%; height: 16rem; object-fit: cover;
        transition: transform 0.5s ease;
    }
    .project-card:hover img { transform: scale(1.03); }
    .project-card-body { padding: 1.25rem; }
    .project-card-body h3 { margin: 0; font-size: 1.25rem; }
    .project-card-body p { color: #334155; }

    .process-section {
        border-radius: 1.5rem;
        background: linear-gradient(to right, rgba(255,255,255,0.1), rgba(255,255,255,0.05), rgba(255,255,255,0.1));
        padding: 2.5rem 1.5rem;
        box-shadow: inset 0 0 0 1px rgba(255,255,255,0.1);
    }
    .process-grid { display: grid; gap: 1.5rem; margin-top: 2rem; }
    @media (min-width: 768px) { .process-grid { grid-template-columns: repeat(3, 1fr); } }
    .process-card {
        border: 1px solid rgba(255,255,255,0.15);
        border-radius: 1rem;
        background: rgba(255,255,255,0.05);
        padding: 1.25rem;
    }
    .process-index { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.18em; }
    .process-rule { display: block; width: 2.5rem; height: 4px; border-radius: 9999px; background: rgba(125,211,252,0.7); }
    .process-card-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.75rem; }

    .about-section {
        border-radius: 1.5rem;
        border: 1px solid rgba(255,255,255,0.1);
        background: linear-gradient(to bottom, rgba(15,23,42,0.7), rgba(15,23,42,0.4), rgba(2,6,23,0.8));
        padding: 2.5rem 1.5rem;
    }
    .about-grid { display: grid; gap: 2rem; }
    @media (min-width: 1024px) { .about-grid { grid-template-columns: 1fr 1fr; } }
    .about-chips { display: flex; flex-wrap: wrap; gap: 0.75rem; font-size: 0.9rem; }
    .about-chip { border-radius: 9999px; padding: 0.25rem 0.75rem; }
    .about-card {
        border: 1px solid rgba(255,255,255,0.1);
        border-radius: 1rem;
        background: rgba(255,255,255,0.05);
        padding: 1.25rem;
        margin-bottom: 1rem;
    }
    .about-card ul { margin: 0.75rem 0 0; padding-left: 1rem; }

    .contact-section {
        border-radius: 1.5rem;
        background: linear-gradient(to right, #f1f5f9, white, #f8fafc);
        color: var(--ink-dark);
        padding: 2.5rem 1.5rem;
        box-shadow: 0 20px 60px rgba(0,0,0,0.25);
    }
    .contact-row { display: flex; flex-direction: column; gap: 1.5rem; }
    @media (min-width: 1024px) {
        .contact-row { flex-direction: row; align-items: center; justify-content: space-between; }
    }
    .contact-cta {
        display: inline-block;
        border-radius: 9999px;
        border: 1px solid rgba(15,23,42,0.7);
        background: #0f172a;
        color: white;
        padding: 0.75rem 1.5rem;
        text-decoration: none;
    }

    .chat-widget { position: fixed; right: 1.5rem; bottom: 1.5rem; z-index: 30; }
    .chat-bubble {
        display: flex; align-items: center; gap: 0.75rem;
        border-radius: 9999px;
        padding: 0.75rem 1rem;
        text-align: left;
        cursor: pointer;
        color: inherit;
    }
    .chat-bubble-copy { display: flex; flex-direction: column; }
    .chat-kicker {
        margin: 0; font-size: 0.7rem;
        text-transform: uppercase; letter-spacing: 0.18em;
        color: rgba(226,232,240,0.8);
    }
    .chat-name { font-size: 0.9rem; font-weight: 600; color: white; }
    .chat-helper { font-size: 0.7rem; color: rgba(226,232,240,0.7); }
    .chat-mascot { width: 3rem; height: 3rem; }
    .mascot-hand { transform-origin: 100px 68px; }
    .mascot-hand.waving { animation: wave 0.9s ease-in-out infinite; }
    @keyframes wave {
        0% { transform: rotate(0deg); }
        25% { transform: rotate(16deg); }
        50% { transform: rotate(-8deg); }
        75% { transform: rotate(12deg); }
        100% { transform: rotate(0deg); }
    }
    .chat-panel {
        margin-top: 0.75rem;
        width: 20rem; max-width: calc(100vw - 2rem);
        border-radius: 1rem;
        padding: 1rem;
        animation: panel-in 0.25s ease-out;
    }
    .chat-panel-header { display: flex; align-items: center; justify-content: space-between; }
    .chat-title { margin: 0; font-size: 1.1rem; }
    .chat-esc { font-size: 0.75rem; padding: 0.25rem 0.5rem; }
    .chat-messages { margin-top: 0.75rem; display: flex; flex-direction: column; gap: 0.5rem; }
    .chat-message.from-user { text-align: right; }
    .chat-message-text {
        display: inline-block;
        border-radius: 1rem;
        padding: 0.5rem 0.75rem;
        font-size: 0.9rem;
        animation: panel-in 0.2s ease-out;
    }
    .chat-message.from-bot .chat-message-text {
        background: rgba(255,255,255,0.1);
        border: 1px solid rgba(255,255,255,0.15);
    }
    .chat-message.from-user .chat-message-text {
        background: rgba(125,211,252,0.2);
        border: 1px solid rgba(186,230,253,0.4);
        color: #f0f9ff;
    }
    .chat-form { margin-top: 0.75rem; display: flex; gap: 0.5rem; }
    .chat-form input {
        flex: 1;
        border-radius: 9999px;
        border: 1px solid rgba(255,255,255,0.2);
        background: rgba(255,255,255,0.05);
        color: white;
        padding: 0.5rem 0.75rem;
        font-size: 0.9rem;
    }
    .chat-form input::placeholder { color: #94a3b8; }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let active = use_active_section();

    html! {
        <div class="page-root">
            <style>{ GLOBAL_STYLE }</style>
            <Header active={active.clone()} />
            <main>
                <div class="page-shell">
                    <Section id="hero" theme={Theme::Dark}>
                        <div class="hero-grid">
                            <div>
                                <p class="hero-badge">{"Raccoon Builds — obra hecha a medida"}</p>
                                <h1 id="hero-title" class="hero-title">
                                    {"Arquitectura de precisión, materiales nobles y dirección obsesiva."}
                                </h1>
                                <p class="hero-lede">
                                    {"Diseñamos y ejecutamos viviendas y espacios comerciales que combinan \
                                      artesanía, ingeniería y sustentabilidad. Menos ruido, más obra bien hecha."}
                                </p>
                                <div class="hero-actions">
                                    <a href="#catalogo" class="glass-button">{"Ver catálogo"}</a>
                                    <a href="#contacto" class="glass-button">{"Agendar llamada"}</a>
                                </div>
                                <div class="hero-tags">
                                    <span class="hero-tag">{"Obra residencial y comercial"}</span>
                                    <span class="hero-tag">{"Diseño + construcción integrada"}</span>
                                </div>
                            </div>
                            <figure class="hero-figure">
                                <img
                                    src={config::ai_image_url("hero.png")}
                                    alt="Render arquitectónico de Raccoon Builds"
                                />
                                <figcaption class="hero-caption glass-panel">
                                    {"Luz natural, materiales táctiles, tecnología oculta."}
                                </figcaption>
                            </figure>
                        </div>
                    </Section>

                    <Section id="catalogo" theme={Theme::Light} class="catalog-section">
                        <p id="catalogo-title" class="section-kicker">{"Catálogo"}</p>
                        <h2 class="section-title">{"Cinco proyectos, cinco obsesiones"}</h2>
                        <p class="section-lede">
                            {"Curamos materiales, detalles y luz en cada entrega. Las imágenes son renders \
                              editoriales generados para ilustrar la dirección estética."}
                        </p>
                        <div class="catalog-grid">
                            {
                                PROJECTS.iter().map(|project| {
                                    html! {
                                        <article key={project.id} class="project-card">
                                            <img
                                                src={config::ai_image_url(project.image)}
                                                alt={project.title}
                                            />
                                            <div class="project-card-body">
                                                <h3>{ project.title }</h3>
                                                <p>{ project.description }</p>
                                            </div>
                                        </article>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </Section>

                    <Section id="proceso" theme={Theme::Dark} class="process-section">
                        <p id="proceso-title" class="section-kicker">{"Proceso"}</p>
                        <h2 class="section-title">{"Metodología integral"}</h2>
                        <p class="section-lede">
                            {"Cada proyecto se ejecuta con un equipo núcleo: diseño, ingeniería y obra en un \
                              solo flujo. Menos fricción, más control de costos y calidad."}
                        </p>
                        <div class="process-grid">
                            {
                                PROCESS_STEPS.iter().enumerate().map(|(index, step)| {
                                    html! {
                                        <div key={step.title} class="process-card">
                                            <div class="process-card-head">
                                                <span class="process-index">{ index + 1 }</span>
                                                <span class="process-rule" />
                                            </div>
                                            <h3>{ step.title }</h3>
                                            <p>{ step.text }</p>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </Section>

                    <Section id="sobre" theme={Theme::Dark} class="about-section">
                        <div class="about-grid">
                            <div>
                                <p id="sobre-title" class="section-kicker">{"Sobre nosotros"}</p>
                                <h2 class="section-title">{"Firma boutique, obsesión por el detalle"}</h2>
                                <p class="section-lede">
                                    {"Raccoon Builds nace de arquitectos y site managers que crecieron en obra. \
                                      Cada línea responde a materialidad, confort y mantenimiento. Controlamos \
                                      proveedores, prototipos y ejecución para que la visión inicial llegue \
                                      intacta al terreno."}
                                </p>
                                <div class="about-chips">
                                    <span class="about-chip glass-panel">{"Dirección integral"}</span>
                                    <span class="about-chip glass-panel">{"Ingeniería BIM"}</span>
                                    <span class="about-chip glass-panel">{"Interiores y FF&E"}</span>
                                </div>
                            </div>
                            <div>
                                <div class="about-card">
                                    <h3>{"Valores"}</h3>
                                    <ul>
                                        <li>{"Transparencia absoluta en costos, contratos y avances."}</li>
                                        <li>{"Materiales honestos: piedra, ladrillo, madera y metal expuesto."}</li>
                                        <li>{"Innovación silenciosa: domótica, energía y aire calibrados."}</li>
                                    </ul>
                                </div>
                                <div class="about-card">
                                    <h3>{"Territorio"}</h3>
                                    <p>
                                        {"Operamos en LATAM y Costa Este de EE.UU. con partners locales y \
                                          cuadrillas especializadas. Supervisamos en español e inglés."}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </Section>

                    <Section id="contacto" theme={Theme::Light} class="contact-section">
                        <div class="contact-row">
                            <div>
                                <p id="contacto-title" class="section-kicker">{"Contacto"}</p>
                                <h2 class="section-title">{"Coordinemos tu próxima obra"}</h2>
                                <p class="section-lede">
                                    {"Cuéntanos el terreno, el programa y la atmósfera que buscas. Respondemos \
                                      con una propuesta de enfoque en menos de 48 horas."}
                                </p>
                            </div>
                            <a href="mailto:hola@raccoonbuilds.com" class="contact-cta">
                                {"Escribir ahora"}
                            </a>
                        </div>
                    </Section>
                </div>
            </main>
            <ChatWidget />
        </div>
    }
}
