//! Fixed candidate lists, as `(factor, label)` pairs in the parser's syntax.

/// Closed-form guesses tried right after the quotient tests.
pub const ENUMERATED: &[(&str, &str)] = &[
    ("x", "μ = x"),
    ("y", "μ = y"),
    ("x*y", "μ = xy"),
    ("x^2", "μ = x²"),
    ("y^2", "μ = y²"),
    ("x^2*y", "μ = x²y"),
    ("x*y^2", "μ = xy²"),
    ("x^2*y^2", "μ = x²y²"),
    ("1/x", "μ = 1/x"),
    ("1/y", "μ = 1/y"),
    ("1/(x*y)", "μ = 1/(xy)"),
    ("1/x^2", "μ = 1/x²"),
    ("1/y^2", "μ = 1/y²"),
    ("1/(x^2*y)", "μ = 1/(x²y)"),
    ("1/(x*y^2)", "μ = 1/(xy²)"),
    ("x+y", "μ = x + y"),
    ("x-y", "μ = x - y"),
    ("1/(x+y)", "μ = 1/(x + y)"),
    ("1/(x-y)", "μ = 1/(x - y)"),
    ("exp(x)", "μ = eˣ"),
    ("exp(y)", "μ = eʸ"),
    ("exp(x+y)", "μ = e^(x+y)"),
    ("exp(x-y)", "μ = e^(x-y)"),
];

/// Rational factors that are always worth a try when reciprocals show up.
pub const RATIONAL_BASE: &[(&str, &str)] = &[("x", "μ = x"), ("x^2", "μ = x²")];

/// Broader monomials, products with exponentials and products of linear forms.
pub const EXTENDED_COMMON: &[(&str, &str)] = &[
    ("1/(x^2*y^2)", "μ = 1/(x²y²)"),
    ("(x*y)^2", "μ = (xy)²"),
    ("exp(x*y)", "μ = e^(xy)"),
    ("exp(-x*y)", "μ = e^(-xy)"),
    ("x^3", "μ = x³"),
    ("y^3", "μ = y³"),
    ("x^3*y", "μ = x³y"),
    ("x*y^3", "μ = xy³"),
    ("1/x^3", "μ = 1/x³"),
    ("1/y^3", "μ = 1/y³"),
    ("1/(x^3*y)", "μ = 1/(x³y)"),
    ("1/(x*y^3)", "μ = 1/(xy³)"),
    ("x/y", "μ = x/y"),
    ("y/x", "μ = y/x"),
    ("x^2+y^2", "μ = x² + y²"),
    ("1/(x^2+y^2)", "μ = 1/(x² + y²)"),
    ("exp(-x)", "μ = e^(-x)"),
    ("exp(-y)", "μ = e^(-y)"),
    ("exp(y)/x", "μ = eʸ/x"),
    ("exp(x)/y", "μ = eˣ/y"),
    ("x*exp(y)", "μ = x·eʸ"),
    ("y*exp(x)", "μ = y·eˣ"),
    ("1/(x*y*(x+y))", "μ = 1/(xy(x + y))"),
    ("1/(x*y*(x-y))", "μ = 1/(xy(x - y))"),
];

/// Low-degree combinations used directly as the factor.
pub const LINEAR_COMBINATIONS: &[(&str, &str)] = &[
    ("x+y", "μ = (x + y)"),
    ("x-y", "μ = (x - y)"),
    ("x+2*y", "μ = (x + 2y)"),
    ("2*x+y", "μ = (2x + y)"),
    ("x^2+y^2", "μ = (x² + y²)"),
    ("x^2-y^2", "μ = (x² - y²)"),
];

pub const TRIGONOMETRIC: &[(&str, &str)] = &[
    ("exp(sin(x))", "μ = e^(sin x)"),
    ("exp(cos(x))", "μ = e^(cos x)"),
    ("exp(sin(y))", "μ = e^(sin y)"),
    ("exp(cos(y))", "μ = e^(cos y)"),
    ("exp(sin(x)+sin(y))", "μ = e^(sin x + sin y)"),
    ("exp(cos(x)+cos(y))", "μ = e^(cos x + cos y)"),
    ("exp(sin(x)-sin(y))", "μ = e^(sin x - sin y)"),
    ("exp(cos(x)-cos(y))", "μ = e^(cos x - cos y)"),
    ("exp(sin(x)+cos(y))", "μ = e^(sin x + cos y)"),
    ("exp(cos(x)+sin(y))", "μ = e^(cos x + sin y)"),
    ("1/cos(x)", "μ = 1/cos x"),
    ("1/sin(x)", "μ = 1/sin x"),
    ("1/cos(y)", "μ = 1/cos y"),
    ("1/sin(y)", "μ = 1/sin y"),
];

/// `(∂N/∂x - ∂M/∂y)/M` shapes with a known `μ(y)`.
pub const QUOTIENT_Y: &[(&str, &str, &str)] = &[
    ("1/y", "y", "μ = y"),
    ("2/y", "y^2", "μ = y²"),
    ("3/y", "y^3", "μ = y³"),
    ("-1/y", "1/y", "μ = 1/y"),
    ("-2/y", "1/y^2", "μ = 1/y²"),
];

/// `(∂M/∂y - ∂N/∂x)/N` shapes with a known `μ(x)`.
pub const QUOTIENT_X: &[(&str, &str, &str)] = &[
    ("1/x", "x", "μ = x"),
    ("2/x", "x^2", "μ = x²"),
    ("-1/x", "1/x", "μ = 1/x"),
];

/// The shortcut subset recognised before any enumeration.
pub const QUOTIENT_Y_PATTERNS: &[(&str, &str, &str)] = &[
    ("-1/y", "1/y", "μ(y) = 1/y"),
    ("-2/y", "1/y^2", "μ(y) = 1/y²"),
    ("1/y", "y", "μ(y) = y"),
];

pub const RATIO_FALLBACK: &[(&str, &str)] = &[
    ("1/y", "μ = 1/y"),
    ("1/y^2", "μ = 1/y²"),
    ("1/y^3", "μ = 1/y³"),
    ("1/x", "μ = 1/x"),
    ("1/x^2", "μ = 1/x²"),
    ("1/(x*y)", "μ = 1/(xy)"),
    ("1/(x*y^2)", "μ = 1/(xy²)"),
    ("1/(x^2*y)", "μ = 1/(x²y)"),
    ("x/y", "μ = x/y"),
    ("y/x", "μ = y/x"),
    ("x/y^2", "μ = x/y²"),
    ("y/x^2", "μ = y/x²"),
];
