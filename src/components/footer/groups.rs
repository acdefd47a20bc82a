use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, PageKind};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Login => vec![FooterGroup {
            name: "LOGIN",
            items: vec![
                FooterItem::new("Tab", "field"),
                FooterItem::new("ENTER", "sign in"),
                FooterItem::new("Esc", "quit"),
            ],
        }],
        AppMode::Normal => {
            let controls = state.controls();
            if controls.modal_visible() {
                return vec![FooterGroup {
                    name: "CONFIRM",
                    items: vec![
                        FooterItem::new("y", "yes").highlight(true),
                        FooterItem::new("n/Esc", "no"),
                    ],
                }];
            }
            if controls.editing.is_some() {
                return vec![FooterGroup {
                    name: "EDIT",
                    items: vec![
                        FooterItem::new("Tab", "next field"),
                        FooterItem::new("ENTER", "save").highlight(controls.saving),
                        FooterItem::new("Esc", "cancel"),
                    ],
                }];
            }

            if let Some(thread) = state.review_thread() {
                return vec![match &thread.draft {
                    Some(_) => FooterGroup {
                        name: "COMMENT",
                        items: vec![
                            FooterItem::new("ENTER", "post").highlight(thread.busy),
                            FooterItem::new("Esc", "discard"),
                        ],
                    },
                    None => FooterGroup {
                        name: "COMMENTS",
                        items: vec![
                            FooterItem::new("j/k", "move"),
                            FooterItem::new("a", "add"),
                            FooterItem::new("e", "edit"),
                            FooterItem::new("x", "delete").highlight(thread.busy),
                            FooterItem::new("Esc", "close"),
                        ],
                    },
                }];
            }

            let mut groups = vec![FooterGroup {
                name: "NAV",
                items: vec![
                    FooterItem::new("d/u", "scroll"),
                    FooterItem::new("j/k", "move"),
                    FooterItem::new("1-4", "page"),
                ],
            }];
            if state.page != PageKind::Profile {
                let filtered = state.search_query().is_some_and(|q| !q.is_empty());
                groups[0]
                    .items
                    .push(FooterItem::new("/", "search").highlight(filtered));
            }
            if state.page == PageKind::Discover {
                let discover = &state.discover;
                groups.push(FooterGroup {
                    name: "FILTER",
                    items: vec![
                        FooterItem::new("s", discover.status.label()),
                        FooterItem::new("c", "completed").highlight(discover.list.completed_only),
                        FooterItem::new("ENTER", "comments"),
                    ],
                });
                groups.push(FooterGroup {
                    name: "ACT",
                    items: vec![
                        FooterItem::new(":", "say"),
                        FooterItem::new("r", "reload"),
                    ],
                });
            } else {
                groups.push(FooterGroup {
                    name: "ACT",
                    items: vec![
                        FooterItem::new("e", "edit"),
                        FooterItem::new("x", "delete"),
                        FooterItem::new(":", "say"),
                        FooterItem::new("r", "reload"),
                    ],
                });
            }
            groups.push(FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem::new("?", "help"),
                    FooterItem::new("n", "history"),
                    FooterItem::new("L", "logout"),
                    FooterItem::new("q", "quit"),
                ],
            });
            groups
        }
        AppMode::Search | AppMode::VoicePrompt => vec![FooterGroup {
            name: "INPUT",
            items: vec![
                FooterItem::new("ENTER", "submit"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("q/Esc/?", "close")],
        }],
        AppMode::History => vec![FooterGroup {
            name: "HISTORY",
            items: vec![FooterItem::new("q/Esc/n", "close")],
        }],
    }
}
