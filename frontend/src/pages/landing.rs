use log::info;
use yew::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::navbar::Navbar;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::{
    Image, DATA_SOURCES, FEATURES, FOOTER_BLURB, FOOTER_COURSE, FOOTER_STATEMENT, FOOTER_TAGS,
    FOREST_IMAGE, HERO_IMAGE, IMPACTS, IMPACT_INTRO, LANDSCAPE_IMAGE, METHOD_STEPS,
    MODELLING_PARAGRAPHS, PROBLEM_PARAGRAPHS, PROBLEM_QUOTE, PROCESS_STEPS, TAGLINE,
};

fn img(image: &Image, class: &'static str) -> Html {
    html! {
        <img src={config::asset(image.file)} alt={image.alt} class={class} />
    }
}

#[function_component(DashboardHero)]
fn dashboard_hero() -> Html {
    html! {
        <div class="dashboard-hero">
            <div class="dashboard-hero__band"></div>
            <div class="dashboard-hero__frame">
                { img(&HERO_IMAGE, "dashboard-hero__image") }
                <div class="dashboard-hero__shade"></div>
            </div>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="container hero__inner">
                <h1 class="hero__title vitis-3d">{"VITIs"}</h1>
                <p class="hero__tagline">{TAGLINE}</p>
                <DashboardHero />
            </div>
        </header>
    }
}

#[function_component(Problem)]
fn problem() -> Html {
    html! {
        <section id="problem" class="section section--white">
            <div class="container two-col">
                <div>
                    <SectionHeading subtitle="Context" title="Addressing Spatial Heterogeneity" />
                    <div class="prose">
                        { for PROBLEM_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                        <p class="prose__quote">{PROBLEM_QUOTE}</p>
                    </div>
                </div>
                <div class="photo photo--square">
                    { img(&LANDSCAPE_IMAGE, "photo__zoom") }
                </div>
            </div>
        </section>
    }
}

#[function_component(DataSources)]
fn data_sources() -> Html {
    html! {
        <section id="data" class="section section--light">
            <div class="container">
                <SectionHeading subtitle="Data Pipeline" title="Scientific Foundations" center=true />
                <div class="card-grid">
                    { for DATA_SOURCES.iter().map(|item| html! {
                        <div class="card" key={item.title}>
                            <div class="card__icon"><IconSvg icon={item.icon} class="icon--lg icon--green" /></div>
                            <h3 class="card__title">{item.title}</h3>
                            <p class="card__source">{item.source}</p>
                            <p class="card__desc">{item.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Modelling)]
fn modelling() -> Html {
    html! {
        <section id="modelling" class="section section--white section--ruled">
            <div class="container two-col">
                <div class="steps-panel">
                    { for METHOD_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="step" key={step.title}>
                            <div class="step__number">{(i + 1).to_string()}</div>
                            <div>
                                <h4 class="step__title">{step.title}</h4>
                                <p class="step__desc">{step.desc}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="modelling__text">
                    <SectionHeading subtitle="Methodology" title="Modelling Approach" />
                    <div class="prose">
                        { for MODELLING_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Impact)]
fn impact() -> Html {
    html! {
        <section id="explorer" class="section section--dark">
            <div class="container impact">
                <SectionHeading
                    subtitle="Impact"
                    title="Actionable Insight, Not Raw Data"
                    center=true
                    title_class="section-heading__title--sage"
                />
                <p class="impact__intro">{IMPACT_INTRO}</p>
                <div class="impact__grid">
                    { for IMPACTS.iter().map(|item| html! {
                        <div class="impact__item" key={item.label}>
                            <IconSvg icon={item.icon} class="icon--md icon--sage" />
                            <span class="impact__label">{item.label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Overview)]
fn overview() -> Html {
    html! {
        <section id="overview" class="section section--white">
            <div class="container">
                <SectionHeading subtitle="The Interface" title="Comprehensive System Overview" center=true />
                <div class="two-col">
                    <div class="features">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="feature" key={feature.title}>
                                <h3 class="feature__title">
                                    <IconSvg icon={feature.icon} class="icon--sm icon--green" />
                                    {feature.title}
                                </h3>
                                <p class="feature__desc">{feature.desc}</p>
                            </div>
                        }) }
                    </div>
                    <div class="photo photo--wide">
                        { img(&FOREST_IMAGE, "photo__cover") }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section class="section section--light">
            <div class="container">
                <SectionHeading subtitle="Workflow" title="The VITIs Process" center=true />
                <div class="process">
                    <div class="process__line"></div>
                    { for PROCESS_STEPS.iter().map(|item| html! {
                        <div class="process__step" key={item.step}>
                            <div class="process__badge">{item.step}</div>
                            <h4 class="step__title">{item.label}</h4>
                            <p class="step__desc">{item.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer__brand">
                    <span class="footer__name vitis-3d-subtle">{"VITIs"}</span>
                    <p class="footer__blurb">{FOOTER_BLURB}</p>
                </div>
                <div class="footer__meta">
                    <div>{FOOTER_COURSE}</div>
                    <div class="footer__tags">
                        { for FOOTER_TAGS.iter().map(|tag| html! { <span>{*tag}</span> }) }
                    </div>
                </div>
                <p class="footer__statement">{FOOTER_STATEMENT}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="page">
            <Navbar />
            <Hero />
            <Problem />
            <DataSources />
            <Modelling />
            <Impact />
            <Overview />
            <Process />
            <Footer />
            <style>
                {r#"
:root {
    --vitis-green: #435a3d;
    --vitis-green-dark: #2f402a;
    --vitis-sage: #a3b18a;
    --vitis-light: #f6f5f0;
    --ink: #262626;
    --muted: #737373;
    --faint: #a3a3a3;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--ink);
    background: #ffffff;
}

::selection {
    background: var(--vitis-green);
    color: #ffffff;
}

h1, h2, h3, h4, .site-nav__brand, .footer__name, .process__badge {
    font-family: 'Playfair Display', Georgia, serif;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.vitis-3d {
    text-shadow: 0 1px 0 #364a31, 0 2px 0 #2f402a, 0 3px 0 #26351f, 0 8px 16px rgba(0, 0, 0, 0.15);
}

.vitis-3d-subtle {
    text-shadow: 0 1px 0 #2f402a, 0 3px 6px rgba(0, 0, 0, 0.12);
}

/* Navbar */
.site-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: all 0.3s ease;
}

.site-nav--top {
    background: transparent;
    padding: 1.5rem 0;
}

.site-nav--scrolled {
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    padding: 1rem 0;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.site-nav__inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.site-nav__brand {
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: var(--vitis-green);
}

.site-nav__links {
    display: flex;
    gap: 2rem;
    font-size: 0.875rem;
    font-weight: 500;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.site-nav__link {
    color: #525252;
    text-decoration: none;
    transition: color 0.2s;
}

.site-nav__link:hover { color: var(--vitis-green); }

.site-nav__badge {
    background: var(--vitis-green);
    color: #ffffff;
    border: none;
    padding: 0.625rem 1.5rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    transition: background 0.2s;
}

.site-nav__badge:hover { background: var(--vitis-green-dark); }

/* Hero */
.hero {
    position: relative;
    padding: 10rem 0 8rem;
    overflow: hidden;
    text-align: center;
}

.hero__title {
    font-size: 8.5rem;
    font-weight: 700;
    color: var(--vitis-green);
    line-height: 1;
    margin: 0 0 1.5rem;
    letter-spacing: -0.05em;
}

.hero__tagline {
    max-width: 42rem;
    margin: 0 auto 4rem;
    font-size: 1.5rem;
    font-weight: 300;
    line-height: 1.6;
    color: #525252;
}

.dashboard-hero {
    position: relative;
    max-width: 72rem;
    margin: 0 auto;
    padding: 2rem;
}

.dashboard-hero__band {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    width: 90%;
    height: 60%;
    background: rgba(67, 90, 61, 0.2);
    border-radius: 4rem;
    pointer-events: none;
}

.dashboard-hero__frame {
    position: relative;
    z-index: 10;
    border-radius: 1rem;
    overflow: hidden;
    border: 1px solid #e5e5e5;
    background: #ffffff;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.dashboard-hero__image {
    display: block;
    width: 100%;
    height: auto;
}

.dashboard-hero__shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.1), transparent);
    pointer-events: none;
}

/* Sections */
.section { padding: 6rem 0; }
.section--white { background: #ffffff; }
.section--light { background: var(--vitis-light); }
.section--dark { background: #1a1a1a; color: #ffffff; }
.section--ruled { border-top: 1px solid #f5f5f5; border-bottom: 1px solid #f5f5f5; overflow: hidden; }

.two-col {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 5rem;
    align-items: center;
}

.section-heading { margin-bottom: 3rem; }
.section-heading--center { text-align: center; }

.section-heading__subtitle {
    color: var(--vitis-green);
    font-weight: 600;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    margin: 0 0 0.75rem;
}

.section-heading__title {
    font-size: 3rem;
    font-weight: 600;
    line-height: 1.25;
    margin: 0;
}

.section-heading__title--dark { color: var(--ink); }
.section-heading__title--sage { color: var(--vitis-sage); }

.prose {
    font-size: 1.125rem;
    font-weight: 300;
    line-height: 1.75;
    color: #525252;
}

.prose p { margin: 0 0 1.5rem; }

.prose__quote {
    border-left: 2px solid var(--vitis-green);
    padding-left: 1.5rem;
    font-style: italic;
}

.photo {
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.photo--square { aspect-ratio: 1 / 1; }
.photo--wide { aspect-ratio: 4 / 3; border: 1px solid #e5e5e5; }

.photo__zoom, .photo__cover {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.photo__zoom { transition: transform 0.7s; }
.photo__zoom:hover { transform: scale(1.05); }

/* Icons */
.icon { display: inline-block; vertical-align: middle; }
.icon--sm { width: 1.25rem; height: 1.25rem; }
.icon--md { width: 1.5rem; height: 1.5rem; display: block; margin: 0 auto 1rem; }
.icon--lg { width: 2rem; height: 2rem; }
.icon--green { color: var(--vitis-green); }
.icon--sage { color: var(--vitis-sage); }

/* Cards */
.card-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.card {
    background: #ffffff;
    padding: 2.5rem;
    border-radius: 1rem;
    border: 1px solid #f5f5f5;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.2s;
}

.card:hover { box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1); }
.card__icon { margin-bottom: 1.5rem; }
.card__title { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.25rem; }

.card__source {
    color: var(--vitis-green);
    font-size: 10px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin: 0 0 1rem;
}

.card__desc { color: var(--muted); font-weight: 300; line-height: 1.6; margin: 0; }

/* Methodology */
.steps-panel {
    background: rgba(67, 90, 61, 0.05);
    border: 1px solid rgba(67, 90, 61, 0.1);
    border-radius: 1.5rem;
    padding: 3rem;
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.step { display: flex; gap: 1rem; }

.step__number {
    width: 3rem;
    height: 3rem;
    flex-shrink: 0;
    border-radius: 50%;
    background: var(--vitis-green);
    color: #ffffff;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}

.step__title { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem; }
.step__desc { font-size: 0.875rem; font-weight: 300; color: var(--muted); margin: 0; }

/* Impact */
.impact { text-align: center; }

.impact__intro {
    max-width: 48rem;
    margin: 0 auto 3rem;
    font-size: 1.25rem;
    font-weight: 300;
    line-height: 1.6;
}

.impact__grid {
    max-width: 48rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}

.impact__item {
    padding: 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.75rem;
    transition: background 0.2s;
}

.impact__item:hover { background: rgba(255, 255, 255, 0.05); }

.impact__label {
    display: block;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

/* Overview */
.features { display: flex; flex-direction: column; gap: 3rem; }

.feature {
    border-bottom: 1px solid #f5f5f5;
    padding-bottom: 2rem;
    transition: border-color 0.2s;
}

.feature:hover { border-color: var(--vitis-green); }

.feature__title {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0 0 0.75rem;
}

.feature__desc { color: var(--muted); font-weight: 300; margin: 0; }

/* Process */
.process {
    position: relative;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 3rem;
}

.process__line {
    position: absolute;
    top: 50%;
    left: 0;
    width: 100%;
    height: 1px;
    background: rgba(67, 90, 61, 0.1);
    transform: translateY(-3rem);
}

.process__step {
    position: relative;
    z-index: 10;
    width: 25%;
    text-align: center;
}

.process__badge {
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    background: var(--vitis-green);
    color: #ffffff;
    font-size: 1.5rem;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

/* Footer */
.footer {
    background: #ffffff;
    padding: 4rem 0;
    border-top: 1px solid #f5f5f5;
}

.footer__brand {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    margin-bottom: 2.5rem;
}

.footer__name {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--vitis-green);
    letter-spacing: -0.05em;
    margin-bottom: 0.75rem;
}

.footer__blurb { color: var(--muted); font-weight: 300; max-width: 42rem; margin: 0; }

.footer__meta {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1.5rem;
    padding-top: 3rem;
    margin-bottom: 3rem;
    border-top: 1px solid #fafafa;
    color: var(--faint);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.footer__tags { display: flex; gap: 2rem; }

.footer__statement {
    text-align: center;
    color: var(--faint);
    font-size: 10px;
    font-weight: 500;
    font-style: italic;
    line-height: 1.6;
    opacity: 0.8;
    margin: 0;
}

@media (max-width: 768px) {
    .site-nav__links { display: none; }
    .hero { padding: 8rem 0 5rem; }
    .hero__title { font-size: 4.5rem; }
    .hero__tagline { font-size: 1.25rem; }
    .dashboard-hero { padding: 1rem; }
    .dashboard-hero__band { height: 50%; border-radius: 3rem; }
    .section-heading__title { font-size: 2.25rem; }
    .two-col, .card-grid { grid-template-columns: 1fr; gap: 3rem; }
    .steps-panel { order: 2; }
    .modelling__text { order: 1; }
    .impact__grid { grid-template-columns: repeat(2, 1fr); }
    .process { flex-direction: column; }
    .process__line { display: none; }
    .process__step { width: 100%; }
    .footer__meta { flex-direction: column; }
}
                "#}
            </style>
        </div>
    }
}
