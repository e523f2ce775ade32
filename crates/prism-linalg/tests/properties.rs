//! Randomized checks of the algebraic properties of vectors and swizzles.

use fastrand::Rng;
use prism_linalg::*;

const ITERATIONS: usize = 1000;

fn scalar(rng: &mut Rng) -> f64 {
    rng.f64() * 200.0 - 100.0
}

fn random_vec2(rng: &mut Rng) -> Vec2d {
    Vector::from_fn(|_| scalar(rng))
}

fn random_vec3(rng: &mut Rng) -> Vec3d {
    Vector::from_fn(|_| scalar(rng))
}

fn random_vec4(rng: &mut Rng) -> Vec4d {
    Vector::from_fn(|_| scalar(rng))
}

#[test]
fn normalized_has_unit_length() {
    let mut rng = Rng::with_seed(0x5eed);
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        assert_approx_eq!(v.normalized().length(), 1.0, "{v:?}").abs(1e-12);

        let v = random_vec4(&mut rng);
        let mut n = v;
        n.normalize();
        assert_approx_eq!(n.length(), 1.0, "{v:?}").abs(1e-12);
    }

    assert_eq!(Vec3d::ZERO.normalized(), Vec3d::ZERO);
    assert_eq!(Vec2f::ZERO.normalized(), Vec2f::ZERO);
}

#[test]
fn length_is_non_negative() {
    let mut rng = Rng::with_seed(7);
    for _ in 0..ITERATIONS {
        assert!(random_vec2(&mut rng).length() >= 0.0);
        assert!(random_vec4(&mut rng).lengthf() >= 0.0);
    }
    assert_eq!(Vec4d::ZERO.length(), 0.0);
}

#[test]
fn dot_with_self_is_squared_length() {
    let mut rng = Rng::with_seed(42);
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        let len = v.length();
        assert_approx_eq!(dot(v, v), len * len, "{v:?}").rel(1e-12);
    }
}

#[test]
fn cross_is_anti_commutative() {
    let mut rng = Rng::with_seed(1234);
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_eq!(cross(a, b), -cross(b, a));

        let n = a.cross(b);
        let scale = a.length() * b.length();
        assert_approx_eq!(n.dot(a) / scale, 0.0).abs(1e-9);
        assert_approx_eq!(n.dot(b) / scale, 0.0).abs(1e-9);
    }
}

#[test]
fn reflection_preserves_length() {
    let mut rng = Rng::with_seed(99);
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        let normal = random_vec3(&mut rng).normalized();
        let r = reflect(v, normal);
        assert_approx_eq!(r.length(), v.length()).rel(1e-12);
        // Reflecting twice is the identity.
        assert_approx_eq!(r.reflected(normal), v).abs(1e-9);
    }
}

// For every permutation `p` with inverse `q`, reading `v.p().q()` and writing through `p_mut`
// both restore `v`.
macro_rules! check_permutations {
    ($v:expr; $($name:ident / $name_mut:ident => $inverse:ident),+ $(,)?) => {{
        let v = $v;
        $(
            let permuted = v.$name().materialize();
            assert_eq!(permuted.$inverse().materialize(), v, stringify!($name));

            let mut restored = -v;
            restored.$name_mut().assign(permuted);
            assert_eq!(restored, v, stringify!($name_mut));
        )+
    }};
}

#[test]
fn permutation_round_trips() {
    let mut rng = Rng::with_seed(2024);
    for _ in 0..ITERATIONS / 10 {
        check_permutations!(random_vec2(&mut rng);
            xy / xy_mut => xy,
            yx / yx_mut => yx,
        );

        check_permutations!(random_vec3(&mut rng);
            xyz / xyz_mut => xyz,
            xzy / xzy_mut => xzy,
            yxz / yxz_mut => yxz,
            yzx / yzx_mut => zxy,
            zxy / zxy_mut => yzx,
            zyx / zyx_mut => zyx,
        );

        check_permutations!(random_vec4(&mut rng);
            xyzw / xyzw_mut => xyzw,
            xywz / xywz_mut => xywz,
            xzyw / xzyw_mut => xzyw,
            xzwy / xzwy_mut => xwyz,
            xwyz / xwyz_mut => xzwy,
            xwzy / xwzy_mut => xwzy,
            yxzw / yxzw_mut => yxzw,
            yxwz / yxwz_mut => yxwz,
            yzxw / yzxw_mut => zxyw,
            yzwx / yzwx_mut => wxyz,
            ywxz / ywxz_mut => zxwy,
            ywzx / ywzx_mut => wxzy,
            zxyw / zxyw_mut => yzxw,
            zxwy / zxwy_mut => ywxz,
            zyxw / zyxw_mut => zyxw,
            zywx / zywx_mut => wyxz,
            zwxy / zwxy_mut => zwxy,
            zwyx / zwyx_mut => wzxy,
            wxyz / wxyz_mut => yzwx,
            wxzy / wxzy_mut => ywzx,
            wyxz / wyxz_mut => zywx,
            wyzx / wyzx_mut => wyzx,
            wzxy / wzxy_mut => zwyx,
            wzyx / wzyx_mut => wzyx,
        );
    }
}

#[test]
fn splat_broadcasts() {
    let mut rng = Rng::with_seed(3);
    for _ in 0..ITERATIONS {
        let v = random_vec4(&mut rng);
        assert_eq!(v.xxxx().materialize(), Vec4d::splat(v.x()));
        assert_eq!(v.aaaa().materialize(), Vec4d::splat(v.w()));
        assert_eq!(v.pppp() + v, Vec4d::splat(v.z()) + v);
    }
}

#[test]
fn swizzle_arithmetic_matches_materialized() {
    let mut rng = Rng::with_seed(11);
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        let w = random_vec3(&mut rng);
        let s = scalar(&mut rng);
        let snapshot = v.zxy().materialize();

        assert_eq!(v.zxy() + w, snapshot + w);
        assert_eq!(v.zxy() - s, snapshot - s);
        assert_eq!(v.zxy() * w, snapshot * w);
        assert_eq!(v.zxy() / s, snapshot / s);

        let mut u = v;
        let mut view = u.zxy_mut();
        view *= w;
        assert_eq!(u.zxy().materialize(), snapshot * w);
    }
}
