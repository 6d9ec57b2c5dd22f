use glow_flow_menu::domain::{SceneConfig, Viewport};
use glow_flow_menu::physics_world::{PhysicsWorld, SimpleWorld, BASE_DELTA_MS};
use glow_flow_menu::simulation::{MenuScene, SpawnController};

const MAX_TICKS: usize = 60 * 60;

#[test]
fn three_pieces_fall_out_and_leave_nothing_behind() {
    let viewport = Viewport::new(1000.0, 800.0);
    let config = SceneConfig {
        seed: Some(2024),
        ..SceneConfig::default()
    };
    let mut world = SimpleWorld::new(viewport, config.gravity_y);
    let mut spawner = SpawnController::new(config);

    for x in [100.0, 500.0, 900.0] {
        let piece = spawner
            .create_piece(&mut world, viewport, Some(x))
            .expect("world accepts the piece");
        assert!(world.contains(piece.handle));
    }
    assert_eq!(spawner.active_count(), 3);
    assert_eq!(world.body_count(), 3);

    let mut pruned = 0;
    let mut ticks = 0;
    while spawner.active_count() > 0 && ticks < MAX_TICKS {
        world.step(BASE_DELTA_MS);
        pruned += spawner.update_pieces(&mut world, viewport, ticks as f64 * BASE_DELTA_MS);
        ticks += 1;
    }

    assert_eq!(spawner.active_count(), 0, "pieces still falling after {ticks} ticks");
    assert_eq!(world.body_count(), 0);
    assert_eq!(pruned, 3);
    // Bursts were scheduled but never fired
    assert!(!spawner.can_spawn());
    assert_eq!(spawner.pending_events(), 1);
}

#[test]
fn scene_from_json_config_runs() {
    let config = SceneConfig::from_json(r#"{"introPieces": 1, "seed": 7}"#).unwrap();
    let mut scene = MenuScene::new(Viewport::new(600.0, 400.0), config);
    scene.start(0.0);
    for i in 0..30 {
        scene.frame(i as f64 * BASE_DELTA_MS);
    }
    assert_eq!(scene.piece_count(), 1);
    assert_eq!(scene.world().body_count(), 1);
    assert_eq!(scene.sprites().len(), 1);
}
