use flythrough::config::RigConfig;
use flythrough::math::CatmullRomCurve;
use flythrough::rig::{look_ahead_parameter, progress, update_camera_rig, CameraRigState};
use glam::Vec3;

#[cfg(test)]
mod rig_tests {
    use super::*;

    fn short_curve() -> CatmullRomCurve {
        CatmullRomCurve::catmull_rom(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -10.0),
                Vec3::new(0.0, 0.0, -15.0),
            ],
            0.5,
        )
        .unwrap()
    }

    #[test]
    fn test_progress_clamps_only_below() {
        assert_eq!(progress(&-0.3f32), 0.0);
        assert_eq!(progress(&0.5f32), 0.5);
        assert_eq!(progress(&1.4f32), 1.4);
    }

    #[test]
    fn test_look_ahead_near_end_clamps_to_one() {
        assert_eq!(look_ahead_parameter(0.999, RigConfig::default().camera_lookahead), 1.0);
    }

    #[test]
    fn test_look_ahead_query_near_end_uses_last_point() {
        // at p = 0.999 the look point is the curve's end, so the facing is
        // exactly from the end back toward the current point
        let curve = short_curve();
        let mut state = CameraRigState::default();
        let p = 0.999;
        let sample = update_camera_rig(&curve, p, 1.0 / 60.0, &RigConfig::default(), &mut state);
        let expected = (curve.point_at(p) - curve.point_at(1.0)).normalize();
        assert!((sample.target_look_dir - expected).length() < 1e-5);
    }

    #[test]
    fn test_position_converges_monotonically() {
        let curve = short_curve();
        let config = RigConfig::default();
        let p = 0.5;
        let target = curve.point_at(p);
        let mut state = CameraRigState::new(Vec3::new(3.0, 2.0, 5.0));
        let mut last = state.position.distance(target);

        for _ in 0..20 {
            update_camera_rig(&curve, p, 1.0 / 60.0, &config, &mut state);
            let distance = state.position.distance(target);
            assert!(distance < last, "distance grew from {last} to {distance}");
            last = distance;
        }
        assert!(last < 1e-3);
    }

    #[test]
    fn test_blend_of_one_lands_on_target() {
        let curve = short_curve();
        let mut state = CameraRigState::new(Vec3::new(0.0, 0.0, 5.0));
        update_camera_rig(&curve, 1.0, 1.0 / 24.0, &RigConfig::default(), &mut state);
        assert!((state.position - Vec3::new(0.0, 0.0, -15.0)).length() < 1e-5);
    }

    #[test]
    fn test_large_dt_overshoots() {
        // blend above one is plain extrapolation
        let curve = short_curve();
        let mut state = CameraRigState::new(Vec3::new(0.0, 0.0, 5.0));
        update_camera_rig(&curve, 1.0, 1.0 / 12.0, &RigConfig::default(), &mut state);
        assert!(state.position.z < -15.0);
    }

    #[test]
    fn test_facing_eases_toward_target() {
        let curve = CatmullRomCurve::catmull_rom(
            vec![Vec3::ZERO, Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-20.0, 0.0, 0.0)],
            0.5,
        )
        .unwrap();
        let mut state = CameraRigState::default();
        let sample = update_camera_rig(&curve, 0.3, 1.0 / 60.0, &RigConfig::default(), &mut state);

        // starts facing +Z, target is +X; one step covers part of the turn
        let forward = state.forward();
        assert!((sample.target_look_dir - Vec3::X).length() < 1e-4);
        assert!(forward.x > 0.0 && forward.z > 0.0);
        assert!(forward.y.abs() < 1e-5);
    }

    #[test]
    fn test_end_of_path_does_not_panic() {
        let curve = short_curve();
        let mut state = CameraRigState::default();
        for p in [1.0, 1.2, 3.0] {
            update_camera_rig(&curve, p, 1.0 / 60.0, &RigConfig::default(), &mut state);
            assert!(state.position.is_finite());
            assert!(state.rotation.is_finite());
        }
    }
}
