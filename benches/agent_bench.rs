use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use slaybot::agent::{Agent, Tuning};
use slaybot::board::{
    Action, Coord, Grid, Object, Owner, Player, PlayerId, Seen, Snapshot, Soldier, Terrain, World,
};
use slaybot::economy::{Balance, GameConfig};
use slaybot::eval::{score, Exponents, UserMap};
use slaybot::search::{distance_field, shortest_path};

const SIZE: usize = 32;

fn seat(i: usize) -> PlayerId {
    PlayerId::from_index(i).unwrap()
}

/// A 32x32 board split into four quadrants with a lake in the middle and
/// towers and soldiers scattered over seat 0's quadrant.
fn board() -> World {
    let mid = SIZE as i32 / 2;
    let land = Grid::filled(SIZE, SIZE, ()).map(|_, c| {
        let lake = (c.row - mid).abs() < 4 && (c.col - mid).abs() < 3;
        Seen::Known(if lake { Terrain::Water } else { Terrain::Land })
    });
    let owners = land.map(|_, c| {
        let quadrant = (c.row >= mid) as usize * 2 + (c.col >= mid) as usize;
        Seen::Known(Owner::Player(seat(quadrant)))
    });
    let objects = land.map(|_, c| {
        let o = match (c.row % 5, c.col % 7) {
            (0, 0) => Object::Tower1,
            (2, 3) => Object::Soldier2,
            (4, 5) => Object::Farm,
            _ => Object::Empty,
        };
        Seen::Known(o)
    });
    World::new(land, owners, objects)
}

fn bench_shortest_path(c: &mut Criterion) {
    let world = board();
    let last = SIZE as i32 - 1;
    c.bench_function("shortest_path_corner_to_corner", |b| {
        b.iter(|| {
            shortest_path(
                black_box(&world.land),
                black_box(Coord::new(0, 0)),
                black_box(Coord::new(last, last)),
            )
        })
    });
}

fn bench_distance_field(c: &mut Criterion) {
    let world = board();
    c.bench_function("distance_field_radius_4", |b| {
        b.iter(|| distance_field(black_box(&world.land), black_box(&world.owners), seat(0), Some(4)))
    });
}

fn bench_score(c: &mut Criterion) {
    let world = board();
    let map = UserMap::build(&world, seat(0));
    c.bench_function("score_quadrant", |b| {
        b.iter(|| score(black_box(&map), Exponents::default()))
    });
}

fn bench_tick(c: &mut Criterion) {
    let world = board();
    let players: Vec<Player> = (0..4)
        .map(|i| Player {
            id: seat(i),
            name: format!("p{}", i),
            rating: 1500.0,
            bot: true,
        })
        .collect();
    let soldiers: Vec<Soldier> = world
        .objects
        .filter_coords(|o, _| o.known().is_some_and(Object::is_soldier));
    let soldiers = soldiers
        .into_iter()
        .map(|coord| Soldier {
            coord,
            cooldown_start: 0,
        })
        .collect();
    let balance = Balance::new(Some(400_000.0), Some(20.0), 60_000, 8000.0);
    let snapshot = Snapshot {
        now: 60_000,
        world,
        me: seat(0),
        balance,
        balances: vec![balance; 4],
        soldiers,
        log: false,
    };
    let mut agent = Agent::new(
        GameConfig::default(),
        players,
        Tuning::default(),
        SmallRng::seed_from_u64(11),
    );
    agent.update(snapshot);

    c.bench_function("agent_tick", |b| {
        b.iter(|| {
            let mut out: Vec<Action> = Vec::new();
            agent.tick(black_box(60_000), &mut out);
            out
        })
    });
}

criterion_group!(
    benches,
    bench_shortest_path,
    bench_distance_field,
    bench_score,
    bench_tick
);
criterion_main!(benches);
