use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use tracing::debug;

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

// Order matters: login input must win over the text prompts, and the page
// controller and comment drafts must see keys before the generic prompt handler.
const FEATURES: [Feature; 6] = [
    features::session::update,
    features::voice::update,
    features::navigation::update,
    features::pages::update,
    features::discover::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    debug!(?action, "unhandled action");
    None
}
