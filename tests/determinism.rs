use verlet_sandbox::{InputEvent, Sandbox, SandboxConfig, Vec2};

fn scripted_run() -> Vec<Vec2<f32>> {
    let mut s: Sandbox<f32> = Sandbox::with_default_scene(SandboxConfig::new()).unwrap();
    s.frame(1.0 / 60.0, [InputEvent::SpawnRequested(Vec2::new(900.0, 100.0))]);
    s.frame(1.0 / 60.0, [InputEvent::PointerDown(Vec2::new(250.0, 250.0))]);
    for i in 0..10 {
        let x = 250.0 + 15.0 * i as f32;
        s.frame(1.0 / 60.0, [InputEvent::PointerMoved(Vec2::new(x, 240.0))]);
    }
    s.frame(1.0 / 60.0, [InputEvent::PointerUp(Vec2::new(400.0, 240.0))]);
    for _ in 0..600 {
        s.step(1.0 / 60.0);
    }
    s.solver().particles().iter().map(|p| p.pos).collect()
}

#[test]
fn scripted_session_deterministic() {
    let results: Vec<_> = (0..5).map(|_| scripted_run()).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
