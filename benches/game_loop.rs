use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blaster::core::World;
use tui_blaster::term::GameView;

fn bench_update(c: &mut Criterion) {
    let mut world = World::new();
    for _ in 0..64 {
        world.spawn_projectile();
        world.update();
    }

    c.bench_function("world_update", |b| {
        b.iter(|| {
            world.spawn_projectile();
            black_box(&mut world).update();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut world = World::new();
    for _ in 0..32 {
        world.spawn_projectile();
        world.update();
    }
    let view = GameView;

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            let frame = view.render(black_box(&world));
            black_box(frame);
        })
    });
}

criterion_group!(benches, bench_update, bench_render);
criterion_main!(benches);
