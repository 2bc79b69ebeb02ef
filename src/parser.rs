use crate::error::{CasError, Result};
use crate::expr::{Expr, Rational};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric0, char, digit0, digit1, multispace0};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::error::{VerboseError, convert_error};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use num_bigint::BigInt;

type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parse an expression. Both `^` and `**` denote exponentiation.
pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(CasError::Parse(convert_error(input, e)))
        }
        Err(nom::Err::Incomplete(_)) => Err(CasError::Parse(format!("incomplete input '{input}'"))),
    }
}

fn parse_add_sub(input: &str) -> PResult<'_, Expr> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> PResult<'_, Expr> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            _ => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

// Unary signs bind looser than powers: -x^2 is -(x^2).
fn parse_unary(input: &str) -> PResult<'_, Expr> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        return Ok((rest, Expr::Neg(expr.boxed())));
    }
    if let Ok((rest, expr)) = preceded(ws(char('+')), parse_unary)(input) {
        return Ok((rest, expr));
    }
    parse_pow(input)
}

fn parse_pow(input: &str) -> PResult<'_, Expr> {
    let (rest, base) = parse_primary(input)?;
    if let Ok((next, exp)) = preceded(ws(alt((tag("**"), tag("^")))), parse_unary)(rest) {
        Ok((next, Expr::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((rest, base))
    }
}

fn parse_primary(input: &str) -> PResult<'_, Expr> {
    alt((parse_parens, parse_function, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> PResult<'_, Expr> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> PResult<'_, Expr> {
    map_res(
        ws(recognize(pair(digit1, opt(pair(char('.'), digit0))))),
        decimal_constant,
    )(input)
}

fn parse_identifier(input: &str) -> PResult<'_, Expr> {
    let (rest, name) = ws(recognize(pair(alpha1, alphanumeric0)))(input)?;
    Ok((rest, Expr::Variable(name.to_string())))
}

fn parse_function(input: &str) -> PResult<'_, Expr> {
    let (rest, (name, arg)) = pair(
        ws(alt((
            tag("sqrt"),
            tag("sin"),
            tag("cos"),
            tag("tan"),
            tag("exp"),
            tag("log"),
            tag("ln"),
        ))),
        alt((parse_parens, parse_primary)),
    )(input)?;

    let expr = match name {
        "sin" => Expr::Sin(arg.boxed()),
        "cos" => Expr::Cos(arg.boxed()),
        "tan" => Expr::Tan(arg.boxed()),
        "exp" => Expr::Exp(arg.boxed()),
        "sqrt" => Expr::Pow(
            arg.boxed(),
            Expr::Constant(Rational::new(1.into(), 2.into())).boxed(),
        ),
        _ => Expr::Log(arg.boxed()),
    };

    Ok((rest, expr))
}

fn decimal_constant(text: &str) -> Result<Expr> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let numer: BigInt = format!("{whole}{fraction}")
        .parse()
        .map_err(|_| CasError::Parse(format!("bad number '{text}'")))?;
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    Ok(Expr::Constant(Rational::new(numer, denom)))
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    F: FnMut(&'a str) -> PResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
