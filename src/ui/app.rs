/// Main Wayfinder page: lookup form, URL tree, and history panel.

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::cdx;
use crate::config;
use crate::domain;
use crate::state::{AppAction, AppState};
use crate::tree;
use crate::ui::components::{HistoryPanel, LimitSelect};
use crate::ui::tree_view::TreeView;

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
    Fetching,
    Error(String),
}

// The trigger only waits for configuration; it stays live while a fetch is
// in flight, and overlapping requests are reconciled by the generation
// token (newest response wins).
fn fetch_disabled(view: &ViewState) -> bool {
    matches!(view, ViewState::Loading)
}

#[function_component(App)]
pub fn app() -> Html {
    let app = use_reducer(AppState::new);
    let view = use_state(|| ViewState::Loading);
    // Monotonic fetch generation; completions compare against it so only the
    // newest response is applied.
    let request_counter = use_mut_ref(|| 0u64);

    // Load configuration on mount
    {
        let app = app.clone();
        let view = view.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match config::load_config().await {
                    Ok(cfg) => {
                        app.dispatch(AppAction::ConfigLoaded(cfg));
                        view.set(ViewState::Idle);
                    }
                    Err(e) => {
                        view.set(ViewState::Error(format!("Failed to load configuration: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    let on_domain_input = {
        let app = app.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                app.dispatch(AppAction::SetDomain(input.value()));
            }
        })
    };

    let on_limit_change = {
        let app = app.clone();
        Callback::from(move |limit: u32| {
            app.dispatch(AppAction::SetLimit(limit));
        })
    };

    let on_toggle = {
        let app = app.clone();
        Callback::from(move |path: Vec<String>| {
            app.dispatch(AppAction::Toggle(path));
        })
    };

    // Fetch handler
    let on_fetch = {
        let app = app.clone();
        let view = view.clone();
        let request_counter = request_counter.clone();

        Callback::from(move |_| {
            let domain = app.domain.clone();
            let limit = app.limit;

            // Both rejections happen before any network call.
            if let Err(err) = domain::check_domain(&domain, &app.blocklist) {
                view.set(ViewState::Error(err.to_string()));
                return;
            }

            let generation = {
                let mut counter = request_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            app.dispatch(AppAction::FetchIssued(generation));
            view.set(ViewState::Fetching);

            let app = app.clone();
            let view = view.clone();
            let request_counter = request_counter.clone();
            spawn_local(async move {
                match cdx::fetch_urls(&domain, limit).await {
                    Ok(urls) => {
                        app.dispatch(AppAction::TreeReady {
                            generation,
                            tree: tree::build(urls),
                        });
                        if *request_counter.borrow() == generation {
                            view.set(ViewState::Idle);
                        }
                    }
                    Err(err) => {
                        // A newer fetch owns the status display; a stale
                        // failure is only logged. The current tree stays.
                        if *request_counter.borrow() == generation {
                            view.set(ViewState::Error(format!("Fetch failed: {}", err)));
                        } else {
                            log::warn!("stale fetch for {} failed: {}", domain, err);
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="container">
            <h1 class="main-title">{"Wayfinder 🌐"}</h1>

            <div class="lookup-form">
                <input
                    type="text"
                    placeholder="example.com"
                    value={app.domain.clone()}
                    oninput={on_domain_input}
                    class="domain-input"
                />
                <LimitSelect value={app.limit} on_change={on_limit_change} />
                <Button
                    onclick={on_fetch}
                    disabled={fetch_disabled(&*view)}
                >
                    {"Fetch"}
                </Button>
            </div>

            // Status display
            {match &*view {
                ViewState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading configuration..."}</p>
                    </div>
                },
                ViewState::Fetching => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Querying archive index..."}</p>
                    </div>
                },
                ViewState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                ViewState::Idle => html! {}
            }}

            if let Some(root) = &app.tree {
                <div class="results">
                    <TreeView
                        root={root.clone()}
                        disclosure={app.disclosure.clone()}
                        on_toggle={on_toggle}
                    />
                    <div class="footer">
                        {format!("{} hosts in current tree", root.len())}
                    </div>
                </div>
            }

            <hr class="divider" />

            <div class="history-section">
                <h2 class="section-title">{"History"}</h2>
                <HistoryPanel entries={app.history.clone()} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_stays_enabled_while_a_fetch_is_in_flight() {
        assert!(!fetch_disabled(&ViewState::Fetching));
        assert!(!fetch_disabled(&ViewState::Idle));
        assert!(!fetch_disabled(&ViewState::Error("boom".to_string())));
    }

    #[test]
    fn test_fetch_disabled_until_config_loads() {
        assert!(fetch_disabled(&ViewState::Loading));
    }
}
