#[cfg(test)]
mod tests {
    use crate::core::{
        Catalog, CommandOutcome, Direction, LightboxCommand, LightboxSession, Product,
        SwipeDetector,
    };

    fn catalog_of(len: usize) -> Catalog {
        Catalog::new(
            (0..len)
                .map(|i| {
                    Product::new(
                        format!("p{i}"),
                        format!("Product {i}"),
                        format!("/images/thumbnails/p{i}.webp"),
                        format!("/images/p{i}.jpg"),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    fn abc() -> Catalog {
        Catalog::new(vec![
            Product::new("a", "A", "/t/a", "/i/a"),
            Product::new("b", "B", "/t/b", "/i/b"),
            Product::new("c", "C", "/t/c", "/i/c"),
        ])
        .unwrap()
    }

    fn opened_at(catalog: &Catalog, index: usize) -> LightboxSession<'_> {
        let mut session = LightboxSession::new(catalog);
        assert!(session.open(&catalog.get(index).unwrap().clone()));
        session
    }

    #[test]
    fn test_next_n_times_returns_to_start() {
        for len in 1..=9 {
            let catalog = catalog_of(len);
            for start in 0..len {
                let mut session = opened_at(&catalog, start);
                for _ in 0..len {
                    session.navigate(Direction::Next);
                }
                assert_eq!(session.current_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_previous_n_times_returns_to_start() {
        for len in 1..=9 {
            let catalog = catalog_of(len);
            for start in 0..len {
                let mut session = opened_at(&catalog, start);
                for _ in 0..len {
                    session.navigate(Direction::Previous);
                }
                assert_eq!(session.current_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        for len in 2..=9 {
            let catalog = catalog_of(len);
            for start in 0..len {
                let mut session = opened_at(&catalog, start);
                session.navigate(Direction::Next);
                session.navigate(Direction::Previous);
                assert_eq!(session.current_index(), start, "len={len} start={start}");

                session.navigate(Direction::Previous);
                session.navigate(Direction::Next);
                assert_eq!(session.current_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_jump_to_sets_exact_index_from_any_state() {
        for len in 1..=7 {
            let catalog = catalog_of(len);
            for start in 0..len {
                for target in 0..len {
                    let mut session = opened_at(&catalog, start);
                    session.navigate(Direction::Next);
                    session.jump_to(target);
                    assert_eq!(session.current_index(), target);
                }
            }
        }
    }

    #[test]
    fn test_every_index_change_resets_image_loaded() {
        for len in 2..=6 {
            let catalog = catalog_of(len);
            let mut session = opened_at(&catalog, 0);

            for step in 0..(len * 3) {
                // Mark whatever is showing as loaded, then move
                assert!(session.on_image_load(session.image_ticket()));
                assert!(session.image_loaded());

                let before = session.current_index();
                if step % 3 == 0 {
                    session.jump_to((before + 1) % len);
                } else if step % 3 == 1 {
                    session.navigate(Direction::Next);
                } else {
                    session.navigate(Direction::Previous);
                }

                assert_ne!(session.current_index(), before);
                assert!(!session.image_loaded(), "len={len} step={step}");
            }
        }
    }

    #[test]
    fn test_revisited_index_is_not_assumed_loaded() {
        let catalog = abc();
        let mut session = opened_at(&catalog, 0);
        assert!(session.on_image_load(session.image_ticket()));

        session.navigate(Direction::Next);
        session.navigate(Direction::Previous);
        assert_eq!(session.current_index(), 0);
        assert!(!session.image_loaded());
    }

    #[test]
    fn test_close_then_open_goes_straight_to_product() {
        let catalog = catalog_of(5);
        for first in 0..5 {
            for second in 0..5 {
                let mut session = opened_at(&catalog, first);
                session.navigate(Direction::Next);
                let token = session.close().unwrap();

                assert!(session.open(&catalog.get(second).unwrap().clone()));
                assert!(session.is_open());
                assert_eq!(session.current_index(), second);
                assert_eq!(
                    session.displayed_product().map(|p| p.id.clone()),
                    Some(format!("p{second}"))
                );
                assert!(!session.image_loaded());
                assert!(!session.finish_close(token));
            }
        }
    }

    #[test]
    fn test_short_swipe_changes_nothing() {
        let catalog = abc();
        let mut session = opened_at(&catalog, 1);
        let before = session.clone();
        let mut detector = SwipeDetector::new(44.0);

        detector.touch_start(100.0, 100.0);
        let command = detector.touch_end(120.0, 100.0);
        assert!(command.is_none());
        if let Some(command) = command {
            session.apply(command);
        }
        assert_eq!(session, before);
    }

    #[test]
    fn test_long_swipes_navigate_exactly_once() {
        let catalog = abc();
        let mut session = opened_at(&catalog, 1);
        let mut detector = SwipeDetector::new(44.0);

        detector.touch_start(200.0, 50.0);
        let command = detector.touch_end(140.0, 50.0).unwrap();
        assert_eq!(command, LightboxCommand::Navigate(Direction::Next));
        session.apply(command);
        assert_eq!(session.current_index(), 2);

        detector.touch_start(140.0, 50.0);
        let command = detector.touch_end(200.0, 50.0).unwrap();
        assert_eq!(command, LightboxCommand::Navigate(Direction::Previous));
        session.apply(command);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_three_item_scenario() {
        let catalog = abc();
        let mut session = LightboxSession::new(&catalog);

        let b = catalog.find("b").unwrap().clone();
        assert!(session.open(&b));
        assert_eq!(session.current_index(), 1);

        session.navigate(Direction::Next);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_product().unwrap().id, "c");

        session.navigate(Direction::Next);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_product().unwrap().id, "a");

        session.navigate(Direction::Previous);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_product().unwrap().id, "c");
    }

    #[test]
    fn test_single_item_wrap() {
        let catalog = catalog_of(1);
        let mut session = opened_at(&catalog, 0);

        session.navigate(Direction::Next);
        assert_eq!(session.current_index(), 0);
        session.navigate(Direction::Previous);
        assert_eq!(session.current_index(), 0);
        assert!(session.is_open());
    }

    #[test]
    fn test_open_unknown_id_keeps_closed() {
        let catalog = abc();
        let mut session = LightboxSession::new(&catalog);

        let ghost = Product::new("ghost", "Ghost", "/t/g", "/i/g");
        assert!(!session.open(&ghost));
        assert!(!session.is_open());
        assert!(session.displayed_product().is_none());
    }

    #[test]
    fn test_product_with_same_name_but_unknown_id_rejected() {
        let catalog = abc();
        let mut session = LightboxSession::new(&catalog);

        let impostor = Product::new("a2", "A", "/t/a", "/i/a");
        assert!(!session.open(&impostor));
        assert!(!session.is_open());
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let catalog = abc();
        let mut session = LightboxSession::new(&catalog);
        let fresh = session.clone();

        assert_eq!(
            session.apply(LightboxCommand::Navigate(Direction::Next)),
            CommandOutcome::Ignored
        );
        assert_eq!(session.apply(LightboxCommand::JumpTo(2)), CommandOutcome::Ignored);
        assert!(!session.navigate(Direction::Previous));
        assert!(!session.jump_to(1));
        assert_eq!(session, fresh);
    }

    #[test]
    fn test_navigation_ignored_during_close_grace_period() {
        let catalog = abc();
        let mut session = opened_at(&catalog, 0);
        let token = session.close().unwrap();
        let closing = session.clone();

        assert_eq!(
            session.apply(LightboxCommand::Navigate(Direction::Next)),
            CommandOutcome::Ignored
        );
        assert_eq!(session.apply(LightboxCommand::JumpTo(2)), CommandOutcome::Ignored);
        assert_eq!(session, closing);
        assert_eq!(session.displayed_product().map(|p| p.id.as_str()), Some("a"));
        assert_eq!(session.replay_count(), closing.replay_count());

        assert!(session.finish_close(token));
        assert!(session.displayed_product().is_none());
    }
}
