//! Seven-cell honeycomb viewer.
//!
//! Right-click a cell to pick its color; Tab toggles the inspector, Escape
//! quits.

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use honeycomb_view::AppState;
use honeycomb_view::honeycomb::{HoneycombConfig, HoneycombPlugin};

#[cfg(feature = "native")]
mod cli {
    use bevy::log::warn;
    use clap::Parser;
    use honeycomb_view::honeycomb::{CellColor, HoneycombConfig};

    /// Seven-cell honeycomb viewer.
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Cli {
        /// Height of each cell in logical pixels.
        #[arg(long)]
        cell_size: Option<f32>,
        /// Side of the square window in logical pixels.
        #[arg(long)]
        window_size: Option<u32>,
        /// Starting colors in cell order, e.g. `White,Red,Blue`.
        #[arg(long, value_delimiter = ',')]
        colors: Vec<CellColor>,
    }

    impl Cli {
        /// Overrides the defaults with whatever was given on the command line.
        pub fn into_config(self) -> HoneycombConfig {
            let mut cfg = HoneycombConfig::default();
            if let Some(size) = self.cell_size {
                cfg.cell_size = size;
            }
            if let Some(size) = self.window_size {
                cfg.window_size = size;
            }
            if self.colors.len() > cfg.initial_colors.len() {
                warn!(
                    "{} colors given, only the first {} are used",
                    self.colors.len(),
                    cfg.initial_colors.len()
                );
            }
            for (slot, color) in cfg.initial_colors.iter_mut().zip(self.colors) {
                *slot = color;
            }
            cfg
        }
    }
}

#[cfg(feature = "native")]
fn load_config() -> HoneycombConfig {
    use clap::Parser;
    cli::Cli::parse().into_config()
}

#[cfg(not(feature = "native"))]
fn load_config() -> HoneycombConfig {
    HoneycombConfig::default()
}

fn main() {
    let cfg = load_config();
    let mut window = Window {
        title: "Hexagon Draw Test".into(),
        ..default()
    };
    let side = cfg.window_size as f32;
    window.resolution.set(side, side);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..default()
    }))
    .register_type::<AppState>()
    .init_state::<AppState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(HoneycombPlugin(cfg))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(AppState::Inspecting)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            AppState::Running => AppState::Inspecting,
            AppState::Inspecting => AppState::Running,
        };
        info!("switching to {new_state:?}");
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use clap::Parser;
    use honeycomb_view::honeycomb::CellColor;

    use super::cli::Cli;

    #[test]
    fn no_arguments_keep_defaults() {
        let cfg = Cli::parse_from(["honeycomb-view"]).into_config();
        let default = super::HoneycombConfig::default();
        assert_eq!(cfg.cell_size, default.cell_size);
        assert_eq!(cfg.window_size, default.window_size);
        assert_eq!(cfg.initial_colors, default.initial_colors);
    }

    #[test]
    fn colors_fill_cells_in_order() {
        let cfg = Cli::parse_from(["honeycomb-view", "--colors", "Blue,Pink", "--cell-size", "64"])
            .into_config();
        assert_eq!(cfg.cell_size, 64.0);
        assert_eq!(cfg.initial_colors[0], CellColor::Blue);
        assert_eq!(cfg.initial_colors[1], CellColor::Pink);
        assert_eq!(cfg.initial_colors[2], CellColor::Orange);
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(Cli::try_parse_from(["honeycomb-view", "--colors", "red"]).is_err());
    }
}
