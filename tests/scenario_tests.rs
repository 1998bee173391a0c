use flythrough::config::{FlythroughConfig, RigConfig};
use flythrough::frame::FixedStepFrames;
use flythrough::math::CatmullRomCurve;
use flythrough::rig::{CameraRigState, PathFollower};
use flythrough::scroll::ScrollControls;
use flythrough::trace::{simulate, ScrollPlan};
use glam::Vec3;

#[cfg(test)]
mod scenario_tests {
    use super::*;

    fn three_point_follower(start: Vec3) -> PathFollower {
        let curve = CatmullRomCurve::catmull_rom(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -10.0),
                Vec3::new(0.0, 0.0, -15.0),
            ],
            0.5,
        )
        .unwrap();
        PathFollower::new(curve, RigConfig::default()).with_rig(CameraRigState::new(start))
    }

    #[test]
    fn test_start_of_path_keeps_rig_at_origin() {
        let mut follower = three_point_follower(Vec3::ZERO);
        let frame = follower.update(&0.0f32, 1.0 / 24.0);
        assert_eq!(frame.rig_position, Vec3::ZERO);
    }

    #[test]
    fn test_end_of_path_lands_in_one_step() {
        let mut follower = three_point_follower(Vec3::new(0.0, 0.0, 5.0));
        let frame = follower.update(&1.0f32, 1.0 / 24.0);
        assert!((frame.rig_position - Vec3::new(0.0, 0.0, -15.0)).length() < 1e-5);
        assert!(frame.rig_rotation.is_finite());
        assert!(frame.airplane_rotation.is_finite());
    }

    #[test]
    fn test_overscroll_keeps_rig_at_start() {
        let mut follower = PathFollower::from_config(&FlythroughConfig::default()).unwrap();
        let mut scroll = ScrollControls::new(30.0, 1.0);
        scroll.set_viewport_height(900.0);
        scroll.scroll_to(-120.0);

        for _ in 0..120 {
            scroll.tick(1.0 / 60.0);
            let frame = follower.update(&scroll, 1.0 / 60.0);
            assert_eq!(frame.progress, 0.0);
            assert!(frame.rig_position.length() < 1e-5);
        }
    }

    #[test]
    fn test_full_flight_respects_bank_limit() {
        let trace = simulate(
            &FlythroughConfig::default(),
            FixedStepFrames::new(1200, 60.0),
            ScrollPlan::new(0.0, 1.0),
            |_| {},
        )
        .unwrap();

        let bank_limit = RigConfig::default().max_bank_deg + 1e-3;
        assert!(trace
            .frames
            .iter()
            .all(|r| r.transforms.target_bank_deg.abs() <= bank_limit));

        // the eased scroll trails the scroll bar
        let last = trace.frames.last().unwrap();
        assert!(last.scroll > 0.8 && last.scroll < 1.0);
    }

    #[test]
    fn test_settled_scroll_returns_home() {
        let mut follower = PathFollower::from_config(&FlythroughConfig::default()).unwrap();
        let mut scroll = ScrollControls::new(30.0, 1.0);
        scroll.set_viewport_height(900.0);
        scroll.scroll_to(scroll.scroll_length());

        let mut frame = follower.update(&scroll, 1.0 / 60.0);
        for _ in 0..1200 {
            scroll.tick(1.0 / 60.0);
            frame = follower.update(&scroll, 1.0 / 60.0);
        }
        assert_eq!(frame.progress, 1.0);
        assert!(frame.rig_position.length() < 1e-3);
    }

    #[test]
    fn test_rig_travels_away_from_origin_mid_flight() {
        let trace = simulate(
            &FlythroughConfig::default(),
            FixedStepFrames::new(600, 60.0),
            ScrollPlan::new(0.0, 1.0),
            |_| {},
        )
        .unwrap();
        let furthest = trace
            .frames
            .iter()
            .map(|r| r.transforms.rig_position.length())
            .fold(0.0f32, f32::max);
        assert!(furthest > 50.0);
    }
}
