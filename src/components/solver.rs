use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::notification::{Toast, ToastHost};
use crate::config;
use crate::solver::classify::{classify, Category};
use crate::solver::state::{validate_problem, SolverAction, SolverState};

#[function_component(ProblemSolver)]
pub fn problem_solver() -> Html {
    let state = use_reducer(SolverState::default);
    let toast = use_state(|| None::<Toast>);

    let on_problem_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(SolverAction::EditProblem(input.value()));
        })
    };

    let on_toggle_category = {
        let state = state.clone();
        Callback::from(move |category: Category| {
            state.dispatch(SolverAction::ToggleCategory(category));
        })
    };

    let on_submit = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            if state.analyzing {
                return;
            }
            let text = state.problem.clone();
            if let Err(err) = validate_problem(&text) {
                toast.set(Some(Toast::error(err.message())));
                return;
            }

            let category = state.category;
            // The reducer assigns this generation to the submission; a result
            // carrying an older one is dropped.
            let generation = state.generation + 1;
            state.dispatch(SolverAction::Submit);

            let delay = config::analysis_delay_ms(&text);
            info!("analyzing problem ({} chars, {delay}ms)", text.chars().count());

            let state = state.clone();
            let toast = toast.clone();
            spawn_local(async move {
                // Simulated analysis pause; the classification itself is instant.
                TimeoutFuture::new(delay).await;
                let solution = classify(&text, category);
                state.dispatch(SolverAction::AnalysisReady {
                    generation,
                    solution,
                });
                toast.set(Some(Toast::success(
                    "Analysis complete! Here's your personalized solution.",
                )));
            });
        })
    };

    let on_clear = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(SolverAction::Clear);
        })
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let solver_css = r#"
        .solver {
            width: 100%;
            max-width: 860px;
            margin: 0 auto;
            display: flex;
            flex-direction: column;
            gap: 2rem;
        }
        .solver-card {
            padding: 2rem;
            border-radius: 16px;
            background: rgba(30, 30, 30, 0.7);
            border: 1px solid rgba(126, 178, 255, 0.1);
        }
        .solver-header {
            text-align: center;
            margin-bottom: 1.5rem;
        }
        .solver-header h2 {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 0.75rem;
            margin: 0 0 0.5rem 0;
            font-size: 1.75rem;
            background: linear-gradient(45deg, #fff, #7EB2FF);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .solver-header h2 i {
            -webkit-text-fill-color: #7EB2FF;
        }
        .solver-header p {
            margin: 0;
            color: #999;
        }
        .solver-label {
            display: block;
            font-size: 0.9rem;
            font-weight: 500;
            color: #ddd;
            margin-bottom: 0.5rem;
        }
        .category-badges {
            display: flex;
            flex-wrap: wrap;
            gap: 0.5rem;
            margin-bottom: 1.25rem;
        }
        .category-badge {
            padding: 0.4rem 0.9rem;
            border-radius: 999px;
            border: 1px solid rgba(126, 178, 255, 0.2);
            background: none;
            color: #ddd;
            font-size: 0.85rem;
            cursor: pointer;
            transition: all 0.2s ease;
        }
        .category-badge:hover {
            transform: scale(1.05);
        }
        .category-badge.active {
            background: rgba(126, 178, 255, 0.2);
            border-color: #7EB2FF;
            color: #7EB2FF;
        }
        .solver textarea {
            width: 100%;
            min-height: 8rem;
            resize: none;
            padding: 1rem;
            border-radius: 12px;
            border: 1px solid rgba(126, 178, 255, 0.2);
            background: rgba(0, 0, 0, 0.2);
            color: #fff;
            font-size: 1rem;
            font-family: inherit;
            line-height: 1.5;
        }
        .solver textarea:focus {
            outline: none;
            border-color: #7EB2FF;
        }
        .solver-submit {
            width: 100%;
            margin-top: 1.25rem;
            display: inline-flex;
            align-items: center;
            justify-content: center;
            gap: 0.6rem;
            padding: 1rem 2rem;
            border-radius: 12px;
            border: none;
            background: linear-gradient(45deg, #7EB2FF, #4169E1);
            color: white;
            font-size: 1.05rem;
            font-weight: 500;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .solver-submit:hover:enabled {
            transform: translateY(-2px);
            box-shadow: 0 4px 20px rgba(126, 178, 255, 0.3);
        }
        .solver-submit:disabled {
            opacity: 0.7;
            cursor: wait;
        }
        .solver-submit .spin {
            animation: solver-spin 1s linear infinite;
        }
        @keyframes solver-spin {
            from { transform: rotate(0deg); }
            to { transform: rotate(360deg); }
        }
        .solution {
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
            animation: solution-in 0.4s ease;
        }
        @keyframes solution-in {
            from {
                opacity: 0;
                transform: translateY(1.5rem);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }
        .solution-analysis {
            border-left: 4px solid #7EB2FF;
            background: linear-gradient(to right, rgba(126, 178, 255, 0.08), transparent);
        }
        .solution-card-title {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin: 0 0 1rem 0;
            font-size: 1.2rem;
            color: #fff;
        }
        .solution-card-title i {
            color: #34D399;
        }
        .solution-analysis .solution-card-title i {
            color: #7EB2FF;
        }
        .solution-analysis p {
            margin: 0;
            color: #ccc;
            line-height: 1.7;
        }
        .solution-category {
            margin-left: auto;
            padding: 0.25rem 0.75rem;
            border-radius: 8px;
            border: 1px solid rgba(126, 178, 255, 0.2);
            color: #7EB2FF;
            font-size: 0.8rem;
            text-transform: capitalize;
        }
        .timeline-badge {
            margin-left: auto;
            padding: 0.25rem 0.75rem;
            border-radius: 8px;
            border: 1px solid rgba(52, 211, 153, 0.2);
            color: #34D399;
            font-size: 0.8rem;
        }
        .solution-steps {
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }
        .solution-step {
            display: flex;
            align-items: flex-start;
            gap: 0.75rem;
            padding: 0.75rem;
            border-radius: 12px;
            background: rgba(0, 0, 0, 0.2);
            transition: background 0.2s ease;
        }
        .solution-step:hover {
            background: rgba(0, 0, 0, 0.35);
        }
        .solution-step-number {
            flex-shrink: 0;
            width: 1.5rem;
            height: 1.5rem;
            border-radius: 50%;
            background: #7EB2FF;
            color: #0f1117;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 0.85rem;
            font-weight: 600;
            margin-top: 0.1rem;
        }
        .solution-step p {
            margin: 0;
            font-size: 0.95rem;
            line-height: 1.5;
            color: #ddd;
        }
        .solution-resources {
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }
        .solution-resource {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 0.75rem;
            border-radius: 12px;
            border: 1px solid rgba(126, 178, 255, 0.1);
            color: #ddd;
            font-size: 0.95rem;
        }
        .solution-resource::before {
            content: "";
            flex-shrink: 0;
            width: 0.5rem;
            height: 0.5rem;
            border-radius: 50%;
            background: #34D399;
        }
        .solver-clear {
            align-self: center;
            padding: 0.75rem 1.5rem;
            border-radius: 12px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            color: #fff;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .solver-clear:hover {
            border-color: rgba(126, 178, 255, 0.4);
        }
    "#;

    html! {
        <div class="solver">
            <style>{solver_css}</style>
            <div class="solver-card">
                <div class="solver-header">
                    <h2>
                        <i class="fas fa-brain"></i>
                        {"AI Problem Analyzer"}
                    </h2>
                    <p>{"Describe your challenge and get an AI-powered solution with actionable steps"}</p>
                </div>
                <label class="solver-label">{"Problem Category (Optional)"}</label>
                <div class="category-badges">
                    {
                        Category::ALL.iter().map(|&category| {
                            let active = state.category == Some(category);
                            let on_toggle_category = on_toggle_category.clone();
                            html! {
                                <button
                                    class={classes!("category-badge", active.then_some("active"))}
                                    onclick={Callback::from(move |_| on_toggle_category.emit(category))}
                                >
                                    {category.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <label class="solver-label">{"Describe Your Problem"}</label>
                <textarea
                    placeholder="Tell me about the challenge you're facing. Be as detailed as possible - the more context you provide, the better solution I can generate..."
                    value={state.problem.clone()}
                    oninput={on_problem_input}
                />
                <button
                    class="solver-submit"
                    disabled={state.analyzing}
                    onclick={on_submit}
                >
                    {
                        if state.analyzing {
                            html! {
                                <>
                                    <i class="fas fa-wand-magic-sparkles spin"></i>
                                    {"Analyzing with AI..."}
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    <i class="fas fa-brain"></i>
                                    {"Generate Solution"}
                                    <i class="fas fa-arrow-right"></i>
                                </>
                            }
                        }
                    }
                </button>
            </div>
            {
                if let Some(solution) = &state.solution {
                    html! {
                        <div class="solution">
                            <div class="solver-card solution-analysis">
                                <h3 class="solution-card-title">
                                    <i class="fas fa-lightbulb"></i>
                                    {"AI Analysis"}
                                    <span class="solution-category">{&solution.category}</span>
                                </h3>
                                <p>{&solution.analysis}</p>
                            </div>
                            <div class="solver-card">
                                <h3 class="solution-card-title">
                                    <i class="fas fa-bullseye"></i>
                                    {"Action Plan"}
                                    <span class="timeline-badge">{&solution.timeline}</span>
                                </h3>
                                <div class="solution-steps">
                                    {
                                        solution.steps.iter().enumerate().map(|(index, step)| {
                                            html! {
                                                <div class="solution-step">
                                                    <div class="solution-step-number">{(index + 1).to_string()}</div>
                                                    <p>{step}</p>
                                                </div>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                            <div class="solver-card">
                                <h3 class="solution-card-title">
                                    <i class="fas fa-circle-check"></i>
                                    {"Recommended Resources"}
                                </h3>
                                <div class="solution-resources">
                                    {
                                        solution.resources.iter().map(|resource| {
                                            html! {
                                                <div class="solution-resource">{resource}</div>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                            <button class="solver-clear" onclick={on_clear}>
                                {"Solve Another Problem"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <ToastHost toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
