//! Binary entry point: logging setup, window creation, and the root
//! DataViewer entity. An optional command-line argument names a dataset
//! to load at startup.

use dataviewer::app::DataViewer;
use gpui::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dataviewer=info")),
        )
        .init();

    let initial_path = std::env::args().nth(1).map(PathBuf::from);

    let app = Application::new();
    app.run(move |cx| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(1100.0), px(760.0)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Data Viewer".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| DataViewer::new(initial_path, cx)),
        );

        match opened {
            Ok(_) => cx.activate(true),
            Err(error) => {
                tracing::error!(%error, "failed to open the main window");
                cx.quit();
            }
        }
    });
}
