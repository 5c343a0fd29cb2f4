use yew::prelude::*;

use crate::components::features::FeatureGrid;
use crate::components::hero::{HeroSection, SOLVER_SECTION_ID};
use crate::components::solver::ProblemSolver;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let page_css = r#"
        .landing-page {
            min-height: 100vh;
            background: radial-gradient(ellipse at top, #1a1f2e, #0f1117);
        }
        .solver-section {
            padding: 5rem 1.5rem;
            background: linear-gradient(to bottom, transparent, rgba(126, 178, 255, 0.04));
        }
        .solver-section-intro {
            text-align: center;
            max-width: 640px;
            margin: 0 auto 3rem;
        }
        .solver-section-intro h2 {
            font-size: 2.5rem;
            margin: 0 0 1rem 0;
            background: linear-gradient(45deg, #fff, #7EB2FF);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .solver-section-intro p {
            margin: 0;
            color: #999;
            font-size: 1.1rem;
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{page_css}</style>
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <HeroSection />
            <FeatureGrid />
            <section id={SOLVER_SECTION_ID} class="solver-section">
                <div class="solver-section-intro">
                    <h2>{"Solve Your Next Challenge"}</h2>
                    <p>{"Pick a category, describe what you're up against, and get a structured plan in seconds."}</p>
                </div>
                <ProblemSolver />
            </section>
        </div>
    }
}
