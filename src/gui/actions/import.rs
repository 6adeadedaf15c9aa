// src/gui/actions/import.rs
use std::path::PathBuf;

use crate::{gui::app::App, store};

/// Merge the deck named in the import box into favorites. A deck with a
/// `brokerage` column goes to the brokerage favorites. A bad deck leaves
/// favorites untouched.
pub fn import_deck(app: &mut App) {
    let text = app.state.gui.import_path_text.trim().to_string();
    if text.is_empty() {
        app.status("Enter a deck path to import");
        return;
    }
    let path = PathBuf::from(&text);

    let res = store::read_deck(&path).and_then(|deck| {
        if deck.headers.iter().any(|h| h.trim().eq_ignore_ascii_case("brokerage")) {
            let added = app.session.import_brokerage_favorites(&deck)?;
            Ok((added, app.session.brokerage_favorites.len(), "brokerage favorite"))
        } else {
            let added = app.session.import_favorites(&deck)?;
            Ok((added, app.session.favorites.len(), "favorite"))
        }
    });
    match res {
        Ok((added, total, what)) => {
            logf!("Import: {} -> {} new", path.display(), added);
            app.status(format!("Imported deck: {added} new {what}(s), {total} total"));
            app.rebuild_view();
        }
        Err(e) => {
            loge!("Import: {}", e);
            app.status(format!("Import failed: {e}"));
        }
    }
}
