use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let css = r#"
        .not-found {
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 1rem;
            background: radial-gradient(ellipse at top, #1a1f2e, #0f1117);
            text-align: center;
            padding: 2rem;
        }
        .not-found h1 {
            font-size: 4rem;
            margin: 0;
            background: linear-gradient(45deg, #fff, #7EB2FF);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .not-found p {
            color: #999;
            margin: 0;
        }
        .not-found a {
            color: #7EB2FF;
            text-decoration: none;
        }
        .not-found a:hover {
            text-decoration: underline;
        }
    "#;

    html! {
        <div class="not-found">
            <style>{css}</style>
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to LifeSolve"}</Link<Route>>
        </div>
    }
}
