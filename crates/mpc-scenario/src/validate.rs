//! Scenario validation logic.
//!
//! `validate` is a pure function of the draft and the model it was built
//! against. It never fails: a malformed numeric field is reported through
//! the error map like any other inconsistency. Field errors never block
//! editing, only submission.

use crate::numvec::{parse_integer, parse_vector};
use crate::schema::ScenarioDraft;
use mpc_model::ModelDefinition;
use serde::Serialize;

/// Per-field admissibility flags, `true` = invalid.
///
/// Always total over the validated field set; a freshly validated map has
/// every entry decided, never a leftover from a previous pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap {
    pub t: bool,
    pub p: bool,
    pub m: bool,
    pub w: bool,
    pub q: bool,
    pub r: bool,
    pub ro_h: bool,
    pub ro_l: bool,
    pub ldu: bool,
    pub lu: bool,
    pub ly: bool,
    pub udu: bool,
    pub uu: bool,
    pub uy: bool,
}

impl ErrorMap {
    /// True when no field is flagged.
    pub fn is_clear(&self) -> bool {
        self.entries().iter().all(|(_, invalid)| !invalid)
    }

    /// Field name / flag pairs, in display order.
    pub fn entries(&self) -> [(&'static str, bool); 14] {
        [
            ("T", self.t),
            ("P", self.p),
            ("M", self.m),
            ("W", self.w),
            ("Q", self.q),
            ("R", self.r),
            ("RoH", self.ro_h),
            ("RoL", self.ro_l),
            ("ldu", self.ldu),
            ("lu", self.lu),
            ("ly", self.ly),
            ("udu", self.udu),
            ("uu", self.uu),
            ("uy", self.uy),
        ]
    }
}

/// Validate a draft against the model it was built for.
pub fn validate(draft: &ScenarioDraft, model: &ModelDefinition) -> ErrorMap {
    let mut errors = ErrorMap::default();

    check_horizons(draft, model, &mut errors);
    check_tunings(draft, model, &mut errors);
    check_constraints(draft, model, &mut errors);

    errors
}

/// Submission gate: all fields clear, a model selected, and every reference
/// entry actually provided.
pub fn admissible(draft: &ScenarioDraft, model: &ModelDefinition) -> bool {
    validate(draft, model).is_clear()
        && !draft.model_name.is_empty()
        && reference_provided(&draft.reference)
}

/// A reference entry is provided once it is a finite number other than the
/// untouched sentinel. The sentinel check is a literal string comparison:
/// `"0"` blocks submission, `"0.0"` does not.
pub fn reference_provided(reference: &[String]) -> bool {
    reference.iter().all(|entry| {
        let entry = entry.trim();
        !entry.is_empty() && entry != "0" && entry.parse::<f64>().is_ok_and(f64::is_finite)
    })
}

/// The four horizon rules read each other's raw values, so all four flags
/// are recomputed together. An unparseable operand fails every comparison
/// it appears in.
fn check_horizons(draft: &ScenarioDraft, model: &ModelDefinition, errors: &mut ErrorMap) {
    let t = parse_integer(&draft.t).ok();
    let p = parse_integer(&draft.p).ok();
    let m = parse_integer(&draft.m).ok();
    let w = parse_integer(&draft.w).ok();
    let n_star = Some(i64::from(model.horizon));

    // T: positive, and the largest of the four.
    errors.t = !(gt(t, Some(0)) && ge(t, p) && ge(t, m) && ge(t, w));
    // P: positive, within the model horizon, hosts M and strictly bounds W.
    errors.p = !(gt(p, Some(0)) && ge(n_star, p) && ge(p, m) && gt(p, w));
    // W: between zero and M.
    errors.w = !(ge(w, Some(0)) && ge(m, w));
    // M: positive and within P.
    errors.m = !(gt(m, Some(0)) && ge(p, m));
}

fn check_tunings(draft: &ScenarioDraft, model: &ModelDefinition, errors: &mut ErrorMap) {
    errors.q = !weights_ok(&draft.q, model.n_cv());
    errors.r = !weights_ok(&draft.r, model.n_mv());

    // Both slack fields empty means slack is intentionally disabled, and
    // the pair is valid at any dimension.
    let ro_h = parse_vector(&draft.ro_h);
    let ro_l = parse_vector(&draft.ro_l);
    if matches!((&ro_h, &ro_l), (Ok(h), Ok(l)) if h.is_empty() && l.is_empty()) {
        errors.ro_h = false;
        errors.ro_l = false;
    } else {
        errors.ro_h = !weights_ok(&draft.ro_h, model.n_cv());
        errors.ro_l = !weights_ok(&draft.ro_l, model.n_cv());
    }
}

fn check_constraints(draft: &ScenarioDraft, model: &ModelDefinition, errors: &mut ErrorMap) {
    let du_ok = bound_pair_ok(&draft.ldu, &draft.udu, model.n_mv());
    errors.ldu = !du_ok;
    errors.udu = !du_ok;

    let u_ok = bound_pair_ok(&draft.lu, &draft.uu, model.n_mv());
    errors.lu = !u_ok;
    errors.uu = !u_ok;

    let y_ok = bound_pair_ok(&draft.ly, &draft.uy, model.n_cv());
    errors.ly = !y_ok;
    errors.uy = !y_ok;
}

/// A weight vector is valid at exactly the required length with every
/// element non-negative.
fn weights_ok(text: &str, required_len: usize) -> bool {
    match parse_vector(text) {
        Ok(values) => values.len() == required_len && values.iter().all(|&v| v >= 0.0),
        Err(_) => false,
    }
}

/// A lower/upper pair is valid when both sides parse to the required length
/// and every element-wise ordering `lower[i] < upper[i]` holds. Either
/// failure invalidates both members.
fn bound_pair_ok(lower_text: &str, upper_text: &str, required_len: usize) -> bool {
    let (Ok(lower), Ok(upper)) = (parse_vector(lower_text), parse_vector(upper_text)) else {
        return false;
    };

    lower.len() == required_len
        && upper.len() == required_len
        && lower.iter().zip(&upper).all(|(lo, hi)| lo < hi)
}

fn gt(a: Option<i64>, b: Option<i64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a > b)
}

fn ge(a: Option<i64>, b: Option<i64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a >= b)
}
