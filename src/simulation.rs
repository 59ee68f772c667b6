use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

// Decorative activity: sidebar badge counts and the presence dot. Nothing
// downstream depends on any of it; a deployment that does not want the noise
// never spawns the refresh loops.

const BADGE_CAP: u32 = 20;
const BADGE_BUMP_PROBABILITY: f64 = 0.3;
const ONLINE_PROBABILITY: f64 = 0.8;

pub const SECTIONS: [&str; 3] = ["bookings", "returns", "messages"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    pub badges: HashMap<String, u32>,
    pub online: bool,
}

pub type BoardHandle = Arc<Mutex<Board>>;

impl Board {
    pub fn new(sections: &[&str]) -> Self {
        Self {
            badges: sections.iter().map(|s| (s.to_string(), 0)).collect(),
            online: true,
        }
    }

    /// Each badge independently gains a count on roughly a third of ticks,
    /// capped so the sidebar never shows a silly number.
    pub fn bump_badges<R: rand::Rng>(&mut self, rng: &mut R) {
        let bump = Bernoulli::new(BADGE_BUMP_PROBABILITY).unwrap();

        for count in self.badges.values_mut() {
            if *count < BADGE_CAP && bump.sample(rng) {
                *count += 1;
            }
        }
    }

    pub fn refresh_presence<R: rand::Rng>(&mut self, rng: &mut R) {
        self.online = Bernoulli::new(ONLINE_PROBABILITY).unwrap().sample(rng);
    }
}

pub struct Simulation {
    board: BoardHandle,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            board: Arc::new(Mutex::new(Board::new(&SECTIONS))),
        }
    }

    pub fn board(&self) -> BoardHandle {
        self.board.clone()
    }

    /// Spawns the two refresh loops. Closing (or dropping) the returned
    /// channel stops both.
    pub fn spawn(
        &self,
        badge_refresh: Duration,
        presence_refresh: Duration,
    ) -> async_channel::Sender<()> {
        let (tx, rx) = async_channel::bounded::<()>(1);

        let board = self.board.clone();
        let stop = rx.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(badge_refresh);
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let mut board = board.lock().await;
                        board.bump_badges(&mut rand::thread_rng());
                    }
                    _ = stop.recv() => break,
                }
            }
        });

        let board = self.board.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(presence_refresh);
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let mut board = board.lock().await;
                        board.refresh_presence(&mut rand::thread_rng());
                    }
                    _ = rx.recv() => break,
                }
            }
        });

        tx
    }
}

#[test]
fn badges_grow_but_never_exceed_the_cap() {
    let mut board = Board::new(&["bookings"]);
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        board.bump_badges(&mut rng);
    }

    let count = *board.badges.get("bookings").unwrap();
    assert!(count > 0);
    assert!(count <= BADGE_CAP);
}

#[test]
fn presence_resamples_both_ways() {
    let mut board = Board::new(&SECTIONS);
    let mut rng = rand::thread_rng();

    let mut seen_online = false;
    let mut seen_offline = false;

    for _ in 0..1000 {
        board.refresh_presence(&mut rng);
        seen_online |= board.online;
        seen_offline |= !board.online;
    }

    assert!(seen_online);
    assert!(seen_offline);
}

#[test]
fn refresh_loops_stop_on_signal() {
    use tokio_test::block_on;

    block_on(async {
        let simulation = Simulation::new();
        let stop = simulation.spawn(
            Duration::from_millis(1),
            Duration::from_millis(1),
        );

        tokio::time::sleep(Duration::from_millis(50)).await;

        stop.close();

        // grace period for an in-flight tick, then counts must hold still
        tokio::time::sleep(Duration::from_millis(20)).await;
        let stopped = simulation.board().lock().await.clone();

        tokio::time::sleep(Duration::from_millis(20)).await;
        let later = simulation.board().lock().await.clone();

        assert_eq!(stopped.badges, later.badges);
    });
}
