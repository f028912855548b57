use yew::prelude::*;

use crate::effects;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Wire the page effects once the rendered structure exists. Order is
    // fixed; each controller is independent after this point.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    effects::tooltip::init(&document);
                    effects::reveal::init(&document);
                    effects::counters::init(&document);
                    effects::parallax::init(&window, &document);
                    effects::glow::init(&document);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Software that earns its keep"}</h1>
                    <p class="hero-subtitle">
                        {"Northglow is a small studio building fast, dependable products for teams that ship. No buzzwords, no handoffs, just working software."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" data-tooltip="We usually reply within one business day">
                            {"Start a project"}
                        </button>
                        <a href="#projects" class="hero-secondary-link">{"See our work"}</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="orb orb-large"></div>
                    <div class="orb orb-small"></div>
                    <div class="grid-lines"></div>
                </div>
            </section>

            <section id="about" class="about">
                <div class="section-inner">
                    <h2 class="scroll-reveal">{"A studio, not an agency"}</h2>
                    <p class="about-lead scroll-reveal">
                        {"We keep the team deliberately small. The people you meet in the first call are the people writing the code, reviewing the designs, and answering the pager."}
                    </p>
                    <div class="about-columns">
                        <div class="about-column scroll-reveal">
                            <h3>{"Product engineering"}</h3>
                            <p>{"From first prototype to production rollout, with the boring-but-vital parts (CI, monitoring, on-call) set up from day one."}</p>
                        </div>
                        <div class="about-column scroll-reveal">
                            <h3>{"Systems work"}</h3>
                            <p>{"APIs, data pipelines, and the services behind them. We like making slow things fast and fragile things boring."}</p>
                        </div>
                        <div class="about-column scroll-reveal">
                            <h3>{"Long-term care"}</h3>
                            <p>{"Most of our clients stay for years. We maintain what we build and leave every codebase better documented than we found it."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="projects" class="projects">
                <div class="section-inner">
                    <h2 class="scroll-reveal">{"Selected work"}</h2>
                    <div class="project-grid">
                        <div class="project-card scroll-reveal" data-tooltip="Logistics · 2024 · ongoing">
                            <div class="project-bg-glow"></div>
                            <h3>{"Freightline"}</h3>
                            <p>{"Dispatch and tracking platform for a regional carrier. Replaced a nightly batch process with live updates; dispatchers now see fleet state in seconds, not hours."}</p>
                            <span class="project-tag">{"Realtime platform"}</span>
                        </div>
                        <div class="project-card scroll-reveal" data-tooltip="Healthcare · 2023">
                            <div class="project-bg-glow"></div>
                            <h3>{"Clearform"}</h3>
                            <p>{"Patient intake forms for a clinic network, rebuilt for accessibility and offline use. Intake time dropped by half across nineteen locations."}</p>
                            <span class="project-tag">{"Web application"}</span>
                        </div>
                        <div class="project-card scroll-reveal" data-tooltip="Developer tools · 2025">
                            <div class="project-bg-glow"></div>
                            <h3>{"Quarry"}</h3>
                            <p>{"Build-cache service we run for client teams. Median CI times went from twelve minutes to under four, and it has not paged anyone in a year."}</p>
                            <span class="project-tag">{"Infrastructure"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section id="stats" class="stats">
                <div class="section-inner">
                    <h2 class="scroll-reveal">{"The numbers so far"}</h2>
                    <div class="stats-grid">
                        <div class="stat-item scroll-reveal">
                            <span class="counter" data-target="48">{"0"}</span>
                            <span class="stat-label">{"Projects Delivered"}</span>
                        </div>
                        <div class="stat-item scroll-reveal">
                            <span class="counter" data-target="27">{"0"}</span>
                            <span class="stat-label">{"Teams Supported"}</span>
                        </div>
                        <div class="stat-item scroll-reveal">
                            <span class="counter" data-target="99">{"0"}</span>
                            <span class="stat-label">{"Uptime Across Hosted Services"}</span>
                        </div>
                        <div class="stat-item scroll-reveal">
                            <span class="counter" data-target="11">{"0"}</span>
                            <span class="stat-label">{"Years In Business"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="section-inner">
                    <h2 class="scroll-reveal">{"Tell us what you're building"}</h2>
                    <p class="contact-lead scroll-reveal">
                        {"A short email is plenty. We'll tell you honestly whether we're the right fit, and point you elsewhere if we're not."}
                    </p>
                    <a
                        class="contact-cta scroll-reveal"
                        href="mailto:hello@northglow.example"
                        data-tooltip="hello@northglow.example"
                    >
                        {"hello@northglow.example"}
                    </a>
                </div>
            </section>

            <footer class="footer">
                <span>{"© 2026 Northglow Studio"}</span>
            </footer>

            <div id="tooltip" class="tooltip"></div>

            <style>
                {r#"
.landing-page {
    color: #e8e8ef;
    background: #0c0d14;
    overflow-x: hidden;
}

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 10;
    padding: 1.25rem 2rem;
    background: transparent;
    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
}

.navbar.scrolled {
    padding: 0.75rem 2rem;
    background: rgba(12, 13, 20, 0.92);
    backdrop-filter: blur(8px);
    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
}

.nav-content {
    max-width: 1100px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-weight: 700;
    font-size: 1.1rem;
    color: #fff;
    text-decoration: none;
    letter-spacing: 0.02em;
}

.nav-links {
    display: flex;
    gap: 1.5rem;
}

.nav-link {
    color: #a9abbd;
    text-decoration: none;
    font-size: 0.95rem;
    padding-bottom: 2px;
    border-bottom: 2px solid transparent;
    transition: color 0.2s ease, border-color 0.2s ease;
}

.nav-link:hover {
    color: #fff;
}

.nav-link.active {
    color: #fff;
    border-bottom-color: rgba(99, 102, 241, 0.9);
}

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 2rem;
}

.hero-content {
    position: relative;
    z-index: 2;
    max-width: 720px;
    will-change: transform, opacity;
}

.hero-content h1 {
    font-size: 3.2rem;
    line-height: 1.15;
    margin-bottom: 1.25rem;
    background: linear-gradient(45deg, #fff, #a5a8ff);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.hero-subtitle {
    font-size: 1.2rem;
    color: #a9abbd;
    margin-bottom: 2rem;
}

.hero-cta-group {
    display: flex;
    gap: 1.25rem;
    align-items: center;
    justify-content: center;
}

.hero-cta {
    background: rgba(99, 102, 241, 0.9);
    border: none;
    color: #fff;
    font-size: 1rem;
    padding: 0.85rem 1.75rem;
    border-radius: 8px;
    cursor: pointer;
    transition: transform 0.2s ease, background 0.2s ease;
}

.hero-cta:hover {
    background: rgba(99, 102, 241, 1);
    transform: translateY(-2px);
}

.hero-secondary-link {
    color: #a9abbd;
    text-decoration: underline;
}

.hero-visual {
    position: absolute;
    inset: 0;
    z-index: 1;
    pointer-events: none;
    will-change: transform;
}

.orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(60px);
}

.orb-large {
    width: 420px;
    height: 420px;
    top: 15%;
    right: 8%;
    background: rgba(99, 102, 241, 0.25);
}

.orb-small {
    width: 220px;
    height: 220px;
    bottom: 18%;
    left: 12%;
    background: rgba(56, 189, 248, 0.18);
}

.grid-lines {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.035) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.035) 1px, transparent 1px);
    background-size: 56px 56px;
    mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
}

section {
    padding: 6rem 2rem;
}

.section-inner {
    max-width: 1100px;
    margin: 0 auto;
}

section h2 {
    font-size: 2.2rem;
    margin-bottom: 1.5rem;
}

.about-lead,
.contact-lead {
    color: #a9abbd;
    max-width: 640px;
    margin-bottom: 2.5rem;
}

.about-columns {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.about-column h3 {
    margin-bottom: 0.75rem;
}

.about-column p {
    color: #a9abbd;
    line-height: 1.6;
}

.project-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.project-card {
    position: relative;
    overflow: hidden;
    padding: 1.75rem;
    border-radius: 12px;
    border: 1px solid rgba(255, 255, 255, 0.08);
    background: rgba(255, 255, 255, 0.03);
}

.project-bg-glow {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.project-card h3 {
    position: relative;
    margin-bottom: 0.75rem;
}

.project-card p {
    position: relative;
    color: #a9abbd;
    line-height: 1.6;
    margin-bottom: 1.25rem;
}

.project-tag {
    position: relative;
    font-size: 0.8rem;
    color: #a5a8ff;
    border: 1px solid rgba(99, 102, 241, 0.4);
    border-radius: 999px;
    padding: 0.25rem 0.75rem;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    text-align: center;
}

.counter {
    display: block;
    font-size: 2.8rem;
    font-weight: 700;
    color: #fff;
}

.stat-label {
    color: #a9abbd;
    font-size: 0.95rem;
}

.contact-cta {
    display: inline-block;
    color: #a5a8ff;
    font-size: 1.2rem;
    text-decoration: none;
    border-bottom: 1px solid rgba(99, 102, 241, 0.5);
}

.footer {
    padding: 2rem;
    text-align: center;
    color: #6b6e80;
    font-size: 0.85rem;
}

.tooltip {
    position: absolute;
    z-index: 20;
    max-width: 260px;
    padding: 0.5rem 0.75rem;
    border-radius: 6px;
    background: rgba(24, 25, 36, 0.97);
    border: 1px solid rgba(99, 102, 241, 0.35);
    color: #e8e8ef;
    font-size: 0.85rem;
    pointer-events: none;
    opacity: 0;
    transition: opacity 0.15s ease;
}

.tooltip.visible {
    opacity: 1;
}

.scroll-reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.scroll-reveal.visible {
    opacity: 1;
    transform: translateY(0);
}

@media (max-width: 768px) {
    .nav-links {
        gap: 0.9rem;
    }

    .hero-content h1 {
        font-size: 2.2rem;
    }

    .about-columns,
    .project-grid {
        grid-template-columns: 1fr;
    }

    .stats-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
                "#}
            </style>
        </div>
    }
}
