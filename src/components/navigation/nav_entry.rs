use dioxus::prelude::*;

use crate::components::navigation::Glyph;
use crate::expansion::ExpansionState;
use crate::hooks::use_theme;
use crate::interaction::{Chevron, EntryContext, Reaction};
use crate::style::ItemStyle;
use crate::types::{DisplayMode, ExpandRequest, IconKind, NavIcon, NavItem, StyleOverrides};

/// One menu entry and, recursively, its submenu.
///
/// Holds no state of its own: whether it is open comes from `expansion`, and
/// every change goes back to the navbar through `on_expand`. `overrides`
/// defaults to the item's own override fields.
#[component]
pub fn NavEntry(
    item: NavItem,
    #[props(default)] level: usize,
    is_mobile: bool,
    on_expand: EventHandler<ExpandRequest>,
    expansion: ExpansionState,
    on_nav_close: EventHandler<()>,
    overrides: Option<StyleOverrides>,
) -> Element {
    let theme = use_theme();

    let has_sub_items = item.has_sub_items();
    let is_expanded = expansion.is_expanded(&item.id, level);
    let entry = EntryContext {
        has_sub_items,
        is_mobile,
        is_expanded,
        level,
    };

    let overrides = overrides.unwrap_or_else(|| item.style_overrides());
    let item_style = ItemStyle::resolve(&overrides, &theme).css_vars();

    let request = ExpandRequest::new(item.id.clone(), level);
    let react = move |reaction: Reaction| {
        if reaction.toggles() {
            on_expand.call(request.clone());
        }
    };

    let wrapper_class = if level > 0 { "nav-item-wrapper nested" } else { "nav-item-wrapper" };
    let item_class = if has_sub_items { "nav-item has-submenu" } else { "nav-item" };
    let submenu_class = if is_expanded { "submenu expanded" } else { "submenu" };

    let content = entry_content(&item, entry);
    let body = match item.href.clone().filter(|_| !has_sub_items) {
        Some(href) => rsx! {
            a {
                class: "nav-link",
                href: "{href}",
                onclick: move |_| on_nav_close.call(()),
                {content}
            }
        },
        None => content,
    };

    let on_enter = react.clone();
    let on_leave = react.clone();
    let on_click = react.clone();
    let on_key = react;

    rsx! {
        div {
            class: wrapper_class,
            style: "{item_style}",
            onmouseenter: move |_| on_enter(entry.on_mouse_enter()),
            onmouseleave: move |_| on_leave(entry.on_mouse_leave()),

            div {
                class: item_class,
                tabindex: "0",
                role: has_sub_items.then_some("button"),
                aria_expanded: has_sub_items.then(|| is_expanded.to_string()),
                aria_haspopup: has_sub_items.then_some("true"),
                onclick: move |evt: MouseEvent| {
                    let reaction = entry.on_click();
                    if reaction.prevents_default() {
                        evt.prevent_default();
                    }
                    on_click(reaction);
                },
                onkeydown: move |evt: KeyboardEvent| {
                    let reaction = entry.on_key(&evt.key());
                    if reaction.prevents_default() {
                        evt.prevent_default();
                    }
                    on_key(reaction);
                },
                {body}
            }

            if has_sub_items {
                div {
                    class: submenu_class,
                    role: "menu",
                    aria_label: "Submenu of {item.label}",
                    for child in item.sub_items.iter() {
                        NavEntry {
                            key: "{child.id}",
                            item: child.clone(),
                            level: level + 1,
                            is_mobile,
                            on_expand,
                            expansion: expansion.clone(),
                            on_nav_close,
                            overrides: child.style_overrides(),
                        }
                    }
                }
            }
        }
    }
}

fn entry_content(item: &NavItem, entry: EntryContext) -> Element {
    let chevron = entry.chevron().map(|chevron| rsx! { ChevronMark { chevron } });

    match item.display_mode {
        DisplayMode::Icon => {
            let icon = item.icon.clone().map(|icon| rsx! { Glyph { icon } });
            rsx! {
                {icon}
                {chevron}
            }
        }
        DisplayMode::Text => rsx! {
            "{item.label}"
            {chevron}
        },
        DisplayMode::Mixed => {
            let icon = item.icon.clone().map(|icon| rsx! { Glyph { icon } });
            rsx! {
                {icon}
                span { class: "label", "{item.label}" }
                {chevron}
            }
        }
    }
}

#[component]
fn ChevronMark(chevron: Chevron) -> Element {
    let (kind, class) = match chevron {
        Chevron::Down { rotated: true } => (IconKind::ChevronDown, "submenu-icon expanded"),
        Chevron::Down { rotated: false } => (IconKind::ChevronDown, "submenu-icon"),
        Chevron::Right => (IconKind::ChevronRight, "submenu-icon"),
    };

    rsx! {
        Glyph { icon: NavIcon::Builtin(kind), class: class.to_string() }
    }
}
