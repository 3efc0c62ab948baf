/// Collapsible URL tree rendering.
///
/// Each node shows a toggle row; an expanded branch renders its children in
/// insertion order, an expanded leaf renders the Live/Archive link pair.
/// Collapsed subtrees are absent from the render tree entirely.
use yew::prelude::*;

use crate::state::DisclosureState;
use crate::tree::{Branch, LeafLinks, UrlNode};

#[derive(Properties, PartialEq)]
pub struct TreeViewProps {
    pub root: Branch,
    pub disclosure: DisclosureState,
    pub on_toggle: Callback<Vec<String>>,
}

#[function_component(TreeView)]
pub fn tree_view(props: &TreeViewProps) -> Html {
    html! {
        <TreeNodeView
            node={UrlNode::Branch(props.root.clone())}
            path={Vec::<String>::new()}
            disclosure={props.disclosure.clone()}
            on_toggle={props.on_toggle.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TreeNodeProps {
    pub node: UrlNode,
    pub path: Vec<String>,
    pub disclosure: DisclosureState,
    pub on_toggle: Callback<Vec<String>>,
}

#[function_component(TreeNodeView)]
pub fn tree_node_view(props: &TreeNodeProps) -> Html {
    let open = props.disclosure.is_open(&props.path);
    let label = props
        .path
        .last()
        .cloned()
        .unwrap_or_else(|| "root".to_string());
    let icon = match &props.node {
        UrlNode::Leaf(_) => "📄",
        UrlNode::Branch(_) if open => "📂",
        UrlNode::Branch(_) => "📁",
    };

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let path = props.path.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(path.clone()))
    };

    html! {
        <div class="tree-node">
            <div class="tree-node-label" {onclick}>
                {format!("{} {}", icon, label)}
            </div>
            if open {
                {match &props.node {
                    UrlNode::Branch(branch) => html! {
                        <div class="tree-node-children">
                            {for branch.iter().map(|(key, child)| {
                                let mut child_path = props.path.clone();
                                child_path.push(key.to_string());
                                html! {
                                    <TreeNodeView
                                        key={key.to_string()}
                                        node={child.clone()}
                                        path={child_path}
                                        disclosure={props.disclosure.clone()}
                                        on_toggle={props.on_toggle.clone()}
                                    />
                                }
                            })}
                        </div>
                    },
                    UrlNode::Leaf(links) => html! {
                        <LeafDetail links={links.clone()} />
                    },
                }}
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LeafDetailProps {
    links: LeafLinks,
}

#[function_component(LeafDetail)]
fn leaf_detail(props: &LeafDetailProps) -> Html {
    html! {
        <div class="leaf-links">
            {"🔗 "}
            <a href={props.links.live_url.clone()} target="_blank" rel="noopener noreferrer">
                {"Live"}
            </a>
            {" | 🕰 "}
            <a href={props.links.archive_url.clone()} target="_blank" rel="noopener noreferrer">
                {"Archive"}
            </a>
        </div>
    }
}
