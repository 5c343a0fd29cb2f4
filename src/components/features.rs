use yew::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-brain",
        title: "AI-Powered Analysis",
        description: "Advanced algorithms analyze your problem from multiple \
                      angles to identify root causes and optimal solutions.",
    },
    Feature {
        icon: "fas fa-bolt",
        title: "Instant Solutions",
        description: "Get comprehensive action plans in seconds, not hours. \
                      Our AI processes information faster than any human \
                      consultant.",
    },
    Feature {
        icon: "fas fa-bullseye",
        title: "Personalized Plans",
        description: "Every solution is tailored to your specific situation, \
                      resources, and constraints for maximum effectiveness.",
    },
    Feature {
        icon: "fas fa-clock",
        title: "24/7 Availability",
        description: "Problems don't wait for business hours. Access \
                      intelligent solutions whenever you need them, day or \
                      night.",
    },
    Feature {
        icon: "fas fa-shield-halved",
        title: "Privacy First",
        description: "Your problems and solutions remain completely private. \
                      Nothing you type ever leaves your browser.",
    },
    Feature {
        icon: "fas fa-users",
        title: "Community Insights",
        description: "Benefit from collective wisdom. Our AI learns from \
                      successful solutions to help solve similar problems.",
    },
];

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    let grid_css = r#"
        .features-section {
            padding: 5rem 1.5rem;
        }
        .features-grid {
            max-width: 1100px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 1.5rem;
        }
        .feature-card {
            padding: 2rem;
            border-radius: 16px;
            background: rgba(30, 30, 30, 0.7);
            border: 1px solid rgba(126, 178, 255, 0.1);
            transition: all 0.3s ease;
        }
        .feature-card:hover {
            border-color: rgba(126, 178, 255, 0.3);
            transform: translateY(-4px);
        }
        .feature-card i {
            font-size: 1.75rem;
            color: #7EB2FF;
            margin-bottom: 1rem;
        }
        .feature-card h3 {
            margin: 0 0 0.75rem 0;
            font-size: 1.2rem;
            color: #fff;
        }
        .feature-card p {
            margin: 0;
            color: #999;
            line-height: 1.6;
            font-size: 0.95rem;
        }
    "#;

    html! {
        <section class="features-section">
            <style>{grid_css}</style>
            <div class="features-grid">
                {
                    FEATURES.iter().map(|feature| {
                        html! {
                            <div class="feature-card">
                                <i class={feature.icon}></i>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
