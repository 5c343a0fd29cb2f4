use yew::prelude::*;

/// Element id of the solver section; the hero CTA scrolls to it.
pub const SOLVER_SECTION_ID: &str = "problem-solver";

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let scroll_to_solver = Callback::from(move |_: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(SOLVER_SECTION_ID) {
                element.scroll_into_view_with_bool(true);
            }
        }
    });

    let hero_css = r#"
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            padding: 4rem 1.5rem;
        }
        .hero-glow {
            position: absolute;
            border-radius: 50%;
            filter: blur(80px);
            animation: hero-float 8s ease-in-out infinite;
        }
        .hero-glow.one {
            top: 5rem;
            left: 2.5rem;
            width: 10rem;
            height: 10rem;
            background: rgba(126, 178, 255, 0.2);
        }
        .hero-glow.two {
            bottom: 5rem;
            right: 2.5rem;
            width: 14rem;
            height: 14rem;
            background: rgba(52, 211, 153, 0.2);
            animation-delay: 1s;
        }
        @keyframes hero-float {
            0%, 100% { transform: translateY(0); }
            50% { transform: translateY(-1.5rem); }
        }
        .hero-content {
            position: relative;
            z-index: 2;
            max-width: 800px;
            text-align: center;
            display: flex;
            flex-direction: column;
            gap: 2rem;
        }
        .hero-badge {
            align-self: center;
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.4rem 1rem;
            border-radius: 999px;
            border: 1px solid rgba(126, 178, 255, 0.2);
            background: rgba(126, 178, 255, 0.1);
            color: #7EB2FF;
            font-size: 0.9rem;
        }
        .hero-title {
            font-size: 4.5rem;
            font-weight: 700;
            line-height: 1.1;
            margin: 0;
        }
        .hero-title .accent {
            background: linear-gradient(45deg, #7EB2FF, #34D399);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-subtitle {
            font-size: 1.25rem;
            color: #999;
            max-width: 540px;
            margin: 0 auto;
        }
        .hero-cta-group {
            display: flex;
            gap: 1rem;
            justify-content: center;
            flex-wrap: wrap;
        }
        .hero-cta {
            display: inline-flex;
            align-items: center;
            gap: 0.6rem;
            padding: 1rem 2rem;
            border-radius: 12px;
            border: none;
            background: linear-gradient(45deg, #7EB2FF, #4169E1);
            color: white;
            font-size: 1.1rem;
            font-weight: 500;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .hero-cta:hover {
            transform: translateY(-2px);
            box-shadow: 0 4px 20px rgba(126, 178, 255, 0.3);
        }
        .hero-cta.secondary {
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(10px);
        }
        .hero-stats {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
            padding-top: 2rem;
        }
        .hero-stat-value {
            font-size: 1.75rem;
            font-weight: 700;
            background: linear-gradient(45deg, #fff, #7EB2FF);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-stat-label {
            color: #999;
            font-size: 0.9rem;
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 3rem;
            }
            .hero-subtitle {
                font-size: 1.1rem;
            }
        }
    "#;

    html! {
        <header class="hero">
            <style>{hero_css}</style>
            <div class="hero-glow one"></div>
            <div class="hero-glow two"></div>
            <div class="hero-content">
                <span class="hero-badge">
                    <i class="fas fa-bolt"></i>
                    {"AI-Powered Solutions"}
                </span>
                <h1 class="hero-title">
                    <span class="accent">{"Life Solved"}</span>
                    <br />
                    <span>{"by AI"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Transform any real-life challenge into actionable solutions. \
                      Our AI analyzes your problems and creates personalized \
                      step-by-step plans to help you succeed."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={scroll_to_solver}>
                        <i class="fas fa-brain"></i>
                        {"Start Solving Problems"}
                    </button>
                    <button class="hero-cta secondary">
                        <i class="fas fa-users"></i>
                        {"See Success Stories"}
                    </button>
                </div>
                <div class="hero-stats">
                    <div>
                        <div class="hero-stat-value">{"10K+"}</div>
                        <div class="hero-stat-label">{"Problems Solved"}</div>
                    </div>
                    <div>
                        <div class="hero-stat-value">{"95%"}</div>
                        <div class="hero-stat-label">{"Success Rate"}</div>
                    </div>
                    <div>
                        <div class="hero-stat-value">{"24/7"}</div>
                        <div class="hero-stat-label">{"Available"}</div>
                    </div>
                </div>
            </div>
        </header>
    }
}
