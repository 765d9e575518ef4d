use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::state::upload::UploadSession;
use crate::ui::actions;
use crate::ui::table::Table;
use crate::ui::toolbar::Toolbar;
use crate::ui::upload::Upload;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let session = use_signal(UploadSession::new);

    use_effect(move || {
        if let Some(path) = config.open_path.clone() {
            spawn(async move {
                actions::load_path(session, path).await;
            });
        }
    });

    let has_table = session.read().table().is_some();

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            if has_table {
                Toolbar { session }
                Table { session }
            } else {
                Upload { session }
            }
        }
    }
}
