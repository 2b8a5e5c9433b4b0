//! Rotation aligning one direction onto another (Rodrigues, matrix form).

use nalgebra::{Matrix3, Vector3};

/// Near-antiparallel threshold on `1 + s·t` below which the closed form
/// divides by (numerically) zero and the π-rotation branch takes over.
const ANTIPARALLEL_EPS: f64 = 1e-12;

/// Canonical patch axis: the north pole of the sphere.
#[inline]
pub fn pole() -> Vector3<f64> {
    Vector3::z()
}

/// Rotation matrix carrying `source` onto `target`.
///
/// Inputs are re-normalized, so any nonzero vectors work. With
/// `v = s × t` and `c = s · t`, the result is `I + K + K²/(1+c)` where `K`
/// is the skew matrix of `v`. For `s == t` this is the identity (`K = 0`).
///
/// Antiparallel inputs (`c = -1`) leave the axis of the π-rotation
/// underdetermined; this implementation picks a deterministic perpendicular
/// axis (cross with +x, or +y when `source` is near ±x) and returns the
/// π-rotation `2aaᵀ − I` about it. The result is always orthonormal with
/// determinant +1.
pub fn rotation_aligning(source: Vector3<f64>, target: Vector3<f64>) -> Matrix3<f64> {
    let s = source.normalize();
    let t = target.normalize();
    let v = s.cross(&t);
    let c = s.dot(&t);

    if 1.0 + c < ANTIPARALLEL_EPS {
        return half_turn_about(perpendicular_axis(s));
    }

    let k = skew(v);
    Matrix3::identity() + k + k * k / (1.0 + c)
}

/// Skew-symmetric cross-product matrix of `v`: `K w = v × w`.
#[inline]
fn skew(v: Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Deterministic unit axis perpendicular to unit `s`.
fn perpendicular_axis(s: Vector3<f64>) -> Vector3<f64> {
    let x = Vector3::x();
    let candidate = s.cross(&x);
    if candidate.norm() > 1e-6 {
        candidate.normalize()
    } else {
        // s is (anti)parallel to +x; any axis in the yz-plane works.
        s.cross(&Vector3::y()).normalize()
    }
}

/// Rotation by π about unit axis `a`: `2aaᵀ − I`.
#[inline]
fn half_turn_about(a: Vector3<f64>) -> Matrix3<f64> {
    2.0 * a * a.transpose() - Matrix3::identity()
}
