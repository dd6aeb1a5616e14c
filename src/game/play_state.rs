//=========================================================================
// Play State
//=========================================================================
//
// The single game state: loads level 1, spawns platforms, the hero and
// coins, then runs collisions and input every tick.
//
// Architecture:
// ```text
//   init     ── arrow keys → HeroAction
//   preload  ── level JSON, images, coin sheet, sounds
//   create   ── background → load_level()
//                 ├─ platforms (immovable, no gravity)
//                 ├─ hero
//                 ├─ coins (no gravity, spinning)
//                 └─ world gravity
//   on_action(Jump) ── jump, sound only if it left the ground
//   update   ── handle_collisions() then handle_input()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use super::character::Character;
use super::host::Host;
use super::level::LevelDescription;
use super::HeroAction;
use crate::core::animation::Animation;
use crate::core::assets::AssetLoader;
use crate::core::geometry::Vec2;
use crate::core::globals::GlobalContext;
use crate::core::input::{InputSystem, KeyCode};
use crate::core::physics::BodyFlags;
use crate::core::scene::Scene;
use crate::core::stage::{Group, SpriteHandle};

//=== Constants ===========================================================

pub const LEVEL_KEY: &str = "level:1";
pub const GRAVITY: f32 = 1200.0;

pub const SFX_JUMP: &str = "sfx:jump";
pub const SFX_COIN: &str = "sfx:coin";

const COIN_TEXTURE: &str = "coin";
const COIN_FRAME: u32 = 22;
const COIN_ANIMATION: &str = "rotate";
const COIN_FRAMES: [usize; 4] = [0, 1, 2, 1];
const COIN_FPS: f32 = 6.0;

//=== PlayWorld ===========================================================

/// Everything spawned from the level description.
#[derive(Debug, Clone)]
struct PlayWorld {
    hero: Character,
    platforms: Group,
    coins: Group,
}

//=== PlayState ===========================================================

#[derive(Debug, Default)]
pub struct PlayState {
    world: Option<PlayWorld>,
}

impl PlayState {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Queries ----------------------------------------------------------

    pub fn hero(&self) -> Option<Character> {
        self.world.as_ref().map(|world| world.hero)
    }

    pub fn platforms(&self) -> Option<&Group> {
        self.world.as_ref().map(|world| &world.platforms)
    }

    pub fn coins(&self) -> Option<&Group> {
        self.world.as_ref().map(|world| &world.coins)
    }

    /// Coins not yet collected.
    pub fn live_coins<H: Host<HeroAction>>(&self, host: &H) -> usize {
        self.coins()
            .map(|coins| coins.members().iter().filter(|&&c| host.is_alive(c)).count())
            .unwrap_or(0)
    }

    //--- Setup ------------------------------------------------------------

    /// Adds the background and builds the level cached under `LEVEL_KEY`.
    ///
    /// A missing or malformed level leaves the state empty: it keeps
    /// running but nothing moves.
    pub fn build<H: Host<HeroAction>>(&mut self, host: &mut H) {
        host.add_image(0.0, 0.0, "background");

        match LevelDescription::from_json(LEVEL_KEY, host.json(LEVEL_KEY)) {
            Ok(level) => self.load_level(host, &level),
            Err(e) => error!(target: "game", "{}", e),
        }
    }

    /// Spawns platforms, the hero and coins (in that draw order), then
    /// turns on gravity.
    pub fn load_level<H: Host<HeroAction>>(&mut self, host: &mut H, level: &LevelDescription) {
        let mut platforms = Group::new();
        for spec in &level.platforms {
            let sprite = host.add_image(spec.x, spec.y, &spec.image);
            host.enable_physics(sprite, BodyFlags::fixed());
            platforms.add(sprite);
        }

        let hero = Character::spawn(host, level.hero.x, level.hero.y);

        let mut coins = Group::new();
        for spec in &level.coins {
            coins.add(spawn_coin(host, spec.x, spec.y));
        }

        host.set_gravity(GRAVITY);

        info!(
            target: "game",
            "Level loaded: {} platforms, {} coins, hero at ({}, {})",
            platforms.len(),
            coins.len(),
            level.hero.x,
            level.hero.y
        );

        self.world = Some(PlayWorld {
            hero,
            platforms,
            coins,
        });
    }

    //--- Tick -------------------------------------------------------------

    /// Collisions first, then input.
    pub fn step<H: Host<HeroAction>>(&mut self, host: &mut H) {
        self.handle_collisions(host);
        self.handle_input(host);
    }

    /// Hero stands on platforms and picks up every coin it touches.
    pub fn handle_collisions<H: Host<HeroAction>>(&self, host: &mut H) {
        let Some(world) = &self.world else {
            return;
        };
        let hero = world.hero.sprite();

        host.collide(hero, &world.platforms);

        for coin in host.overlap(hero, &world.coins) {
            if host.kill(coin) {
                debug!(target: "game", "Coin #{} collected", coin.index());
                host.play_sound(SFX_COIN);
            }
        }
    }

    /// Left wins over right; nothing held stops the hero.
    pub fn handle_input<H: Host<HeroAction>>(&self, host: &mut H) {
        let Some(world) = &self.world else {
            return;
        };

        let direction = if host.is_down(HeroAction::Left) {
            -1.0
        } else if host.is_down(HeroAction::Right) {
            1.0
        } else {
            0.0
        };
        world.hero.walk(host, direction);
    }

    /// Jump key went down. Returns whether the hero left the ground.
    pub fn on_jump<H: Host<HeroAction>>(&self, host: &mut H) -> bool {
        let Some(world) = &self.world else {
            return false;
        };

        let jumped = world.hero.jump(host);
        if jumped {
            host.play_sound(SFX_JUMP);
        }
        jumped
    }
}

fn spawn_coin<H: Host<HeroAction>>(host: &mut H, x: f32, y: f32) -> SpriteHandle {
    let sprite = host.add_sprite(x, y, COIN_TEXTURE, Vec2::new(0.5, 0.5));
    host.enable_physics(sprite, BodyFlags::dynamic().without_gravity());
    host.add_animation(sprite, COIN_ANIMATION, Animation::new(&COIN_FRAMES, COIN_FPS, true));
    host.play_animation(sprite, COIN_ANIMATION);
    sprite
}

//=== Scene Integration ===================================================

impl Scene<HeroAction> for PlayState {
    fn init(&mut self, input: &mut InputSystem<HeroAction>) {
        input.bind_key(KeyCode::ArrowLeft, HeroAction::Left);
        input.bind_key(KeyCode::ArrowRight, HeroAction::Right);
        input.bind_key(KeyCode::ArrowUp, HeroAction::Jump);
    }

    fn preload(&mut self, loader: &mut AssetLoader) {
        loader.json(LEVEL_KEY, "data/level01.json");

        loader.image("background", "images/background.png");
        loader.image("ground", "images/ground.png");
        loader.image("grass:8x1", "images/grass_8x1.png");
        loader.image("grass:6x1", "images/grass_6x1.png");
        loader.image("grass:4x1", "images/grass_4x1.png");
        loader.image("grass:2x1", "images/grass_2x1.png");
        loader.image("grass:1x1", "images/grass_1x1.png");
        loader.image("hero", "images/hero_stopped.png");
        loader.spritesheet(COIN_TEXTURE, "images/coin_animated.png", COIN_FRAME, COIN_FRAME);

        loader.audio(SFX_JUMP, "audio/jump.wav");
        loader.audio(SFX_COIN, "audio/coin.wav");
    }

    fn create(&mut self, context: &mut GlobalContext<HeroAction>) {
        self.build(context);
    }

    fn update(&mut self, context: &mut GlobalContext<HeroAction>) {
        self.step(context);
    }

    fn on_action(&mut self, action: HeroAction, context: &mut GlobalContext<HeroAction>) {
        if action == HeroAction::Jump {
            self.on_jump(context);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
