// src/gui/actions/export.rs
use crate::{
    gui::app::App,
    config::options::TableKind,
    file::{DirSink, Sink},
};

/// Write every loaded table through a `DirSink` into the chosen directory.
pub fn export(app: &mut App) {
    // normalize out dir first (mutates app) before any &app borrows
    app.commit_out_path();

    let mut sink = DirSink::new(app.state.options.export.clone());
    let mut written = Vec::new();
    let mut failed = None;

    for kind in TableKind::ALL {
        let Some(ds) = app.tables.get(&kind) else { continue };
        match sink.write_table(kind, ds) {
            Ok(path) => written.push(path),
            Err(e) => {
                loge!("Export: {:?} failed: {}", kind, e);
                failed = Some(e);
                break;
            }
        }
    }

    let msg = match (failed, written.last()) {
        (Some(e), _) => format!("Export error: {e}"),
        (None, None) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        (None, Some(last)) => {
            logf!("Export: OK count={} last={}", written.len(), last.display());
            format!("Exported {} file(s). Last: {}", written.len(), last.display())
        }
    };
    app.status(msg);
}
