//=========================================================================
// Hero Platformer: Binary
//
// Opens the 960 × 600 window and runs the play state.
//
// Logging honours `RUST_LOG` (default: `info`), e.g.
//   RUST_LOG=audio=info,game=debug hero-platformer
//
//=========================================================================

use hero_platformer::game::{GameScene, HeroAction, PlayState};
use hero_platformer::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    EngineBuilder::<GameScene, HeroAction>::new()
        .with_title("Hero Platformer")
        .with_window_size(960, 600)
        .with_asset_root("assets")
        .build()
        .init(|systems| {
            systems
                .scene_manager
                .register_default(GameScene::Play, PlayState::new());
        })
        .run();
}
