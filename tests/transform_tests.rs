use approx::assert_relative_eq;
use armreach::{
    JointRole,
    errors::EnvelopeError,
    float_types::{FRAC_PI_2, PI, Real},
    transform,
};
use nalgebra::{Matrix4, Point3};

mod support;

#[rustfmt::skip]
#[test]
fn zero_angle_reduces_to_translation() {
    let d = 7.0;
    assert_eq!(
        JointRole::Base.transform(0.0, d),
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, d,
            0.0, 0.0, 0.0, 1.0,
        )
    );
    assert_eq!(
        JointRole::TurnSide.transform(0.0, d),
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0,
            0.0, 1.0, 0.0, d,
            0.0, 0.0, 0.0, 1.0,
        )
    );
    assert_eq!(
        JointRole::RepeatSide.transform(0.0, d),
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, d,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    );
    assert_eq!(
        JointRole::TurnUp.transform(0.0, d),
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, d,
            0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    );
}

#[rustfmt::skip]
#[test]
fn quarter_turn_entries() {
    let d = 2.0;
    assert_relative_eq!(
        JointRole::TurnSide.transform(FRAC_PI_2, d),
        Matrix4::new(
            0.0, -1.0, 0.0, -d,
            0.0, 0.0, -1.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        JointRole::RepeatSide.transform(FRAC_PI_2, d),
        Matrix4::new(
            0.0, -1.0, 0.0, -d,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        JointRole::TurnUp.transform(FRAC_PI_2, d),
        Matrix4::new(
            0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, d,
            -1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        epsilon = 1e-12
    );
}

#[test]
fn transforms_are_rigid() {
    for role in [JointRole::Base, JointRole::TurnSide, JointRole::RepeatSide, JointRole::TurnUp] {
        let m = role.transform(0.7, 3.0);
        let r = m.fixed_view::<3, 3>(0, 0);
        assert_relative_eq!(r.transpose() * r, nalgebra::Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
        assert_eq!(m.row(3).into_owned(), nalgebra::RowVector4::new(0.0, 0.0, 0.0, 1.0));
    }
}

#[test]
fn base_rotation_leaves_tip_on_axis() {
    for deg in [-180.0, -90.0, 0.0, 45.0, 180.0] {
        let m = transform(1, 1, (deg as Real).to_radians(), 10.0).unwrap();
        let [x, y, z] = support::translation(&m);
        assert_eq!((x, y, z), (0.0, 0.0, 10.0));
    }
}

#[test]
fn two_joint_chain_matches_closed_form() {
    let d = 10.0;
    let (q1, q2) = (0.4 as Real, -1.1 as Real);
    let pose = transform(1, 2, q1, d).unwrap() * transform(2, 2, q2, d).unwrap();
    let tip = pose.transform_point(&Point3::origin());
    assert_relative_eq!(tip.x, -d * q2.sin() * q1.cos(), epsilon = 1e-12);
    assert_relative_eq!(tip.y, -d * q2.sin() * q1.sin(), epsilon = 1e-12);
    assert_relative_eq!(tip.z, d * q2.cos() + d, epsilon = 1e-12);
}

#[test]
fn factory_uses_dof_dependent_roles() {
    // Joint 4 turns up on a six-joint arm but repeats the side plane on a five-joint arm.
    assert_eq!(transform(4, 6, PI, 1.0).unwrap(), JointRole::TurnUp.transform(PI, 1.0));
    assert_eq!(transform(4, 5, PI, 1.0).unwrap(), JointRole::RepeatSide.transform(PI, 1.0));
}

#[test]
fn factory_rejects_unknown_joints() {
    assert_eq!(
        transform(3, 2, 0.0, 1.0),
        Err(EnvelopeError::UnsupportedConfiguration { joint_index: 3, dof: 2 })
    );
    assert!(matches!(
        transform(1, 10, 0.0, 1.0),
        Err(EnvelopeError::UnsupportedConfiguration { dof: 10, .. })
    ));
}
