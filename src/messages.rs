//! Default notification messages
//!
//! Every check has a [`Code`] and a message template per [`Locale`].
//! Templates use positional placeholders: `{0}` is always the property name,
//! `{1}` and `{2}` are the constraints of the check (a bound, a length, the
//! text being compared). Literal braces are written `{{` and `}}`.
//!
//! # Examples
//!
//! ```
//! use notifiable::{Code, Locale};
//! use notifiable::messages::render;
//!
//! assert_eq!(
//!     Code::NotNull.message(Locale::EnUs, "Dependents", &[]),
//!     "Field Dependents should be equals to null."
//! );
//!
//! let text = render("{0} must be at least {1}", &[&"Age", &18]).unwrap();
//! assert_eq!(text, "Age must be at least 18");
//! ```

use std::fmt::{self, Display, Write as _};

use crate::config::Locale;
use crate::error::{Error, Result};

/// Identifies the check that raised a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[allow(missing_docs)]
pub enum Code {
    NullOrEmpty,
    NullOrWhiteSpace,
    NotNullOrEmpty,
    NullOrInvalidLength,
    LengthLowerThan,
    LengthGreaterThan,
    LengthNotEqual,
    NotEmail,
    NotUrl,
    NotContains,
    Contains,
    NotCpf,
    NotCnpj,
    NotGuid,
    NotDate,
    NotEqualsIgnoreCase,
    EqualsIgnoreCase,
    NotMatch,
    LowerThan,
    GreaterThan,
    LowerOrEqual,
    GreaterOrEqual,
    NotInRange,
    InRange,
    Equals,
    NotEquals,
    Zero,
    Null,
    NotNull,
    True,
    False,
    CollectionIsNull,
    CollectionIsNullOrEmpty,
    CollectionIsEmpty,
    EnumInvalid,
    /// Recorded explicitly by the caller or by a contract
    Custom,
}

impl Code {
    /// Stable snake_case identifier, suitable for API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Code::NullOrEmpty => "null_or_empty",
            Code::NullOrWhiteSpace => "null_or_white_space",
            Code::NotNullOrEmpty => "not_null_or_empty",
            Code::NullOrInvalidLength => "null_or_invalid_length",
            Code::LengthLowerThan => "length_lower_than",
            Code::LengthGreaterThan => "length_greater_than",
            Code::LengthNotEqual => "length_not_equal",
            Code::NotEmail => "not_email",
            Code::NotUrl => "not_url",
            Code::NotContains => "not_contains",
            Code::Contains => "contains",
            Code::NotCpf => "not_cpf",
            Code::NotCnpj => "not_cnpj",
            Code::NotGuid => "not_guid",
            Code::NotDate => "not_date",
            Code::NotEqualsIgnoreCase => "not_equals_ignore_case",
            Code::EqualsIgnoreCase => "equals_ignore_case",
            Code::NotMatch => "not_match",
            Code::LowerThan => "lower_than",
            Code::GreaterThan => "greater_than",
            Code::LowerOrEqual => "lower_or_equal",
            Code::GreaterOrEqual => "greater_or_equal",
            Code::NotInRange => "not_in_range",
            Code::InRange => "in_range",
            Code::Equals => "equals",
            Code::NotEquals => "not_equals",
            Code::Zero => "zero",
            Code::Null => "null",
            Code::NotNull => "not_null",
            Code::True => "true",
            Code::False => "false",
            Code::CollectionIsNull => "collection_is_null",
            Code::CollectionIsNullOrEmpty => "collection_is_null_or_empty",
            Code::CollectionIsEmpty => "collection_is_empty",
            Code::EnumInvalid => "enum_invalid",
            Code::Custom => "custom",
        }
    }

    /// The message template of this code in `locale`.
    pub fn template(self, locale: Locale) -> &'static str {
        match locale {
            Locale::EnUs => self.english(),
            Locale::PtBr => self.portuguese(),
        }
    }

    /// Render the default message for `property` with the check's constraints.
    ///
    /// `args` fill `{1}`, `{2}`, ... in order.
    pub fn message(self, locale: Locale, property: &str, args: &[&dyn Display]) -> String {
        let template = self.template(locale);
        let mut all: Vec<&dyn Display> = Vec::with_capacity(args.len() + 1);
        all.push(&property);
        all.extend_from_slice(args);
        // Built-in templates only reference the arguments their checks pass.
        render(template, &all).unwrap_or_else(|_| template.to_string())
    }

    fn english(self) -> &'static str {
        match self {
            Code::NullOrEmpty => "Field {0} should not be null or empty.",
            Code::NullOrWhiteSpace => "Field {0} should not be null, empty or white space.",
            Code::NotNullOrEmpty => "Field {0} should be null or empty.",
            Code::NullOrInvalidLength => "Field {0} should have between {1} and {2} characters.",
            Code::LengthLowerThan => "Field {0} should have at least {1} characters.",
            Code::LengthGreaterThan => "Field {0} should have at most {1} characters.",
            Code::LengthNotEqual => "Field {0} should have exactly {1} characters.",
            Code::NotEmail => "Field {0} should be a valid e-mail address.",
            Code::NotUrl => "Field {0} should be a valid URL.",
            Code::NotContains => "Field {0} should contain {1}.",
            Code::Contains => "Field {0} should not contain {1}.",
            Code::NotCpf => "Field {0} should be a valid CPF.",
            Code::NotCnpj => "Field {0} should be a valid CNPJ.",
            Code::NotGuid => "Field {0} should be a valid GUID.",
            Code::NotDate => "Field {0} should be a valid date.",
            Code::NotEqualsIgnoreCase | Code::NotEquals => "Field {0} should be equals to {1}.",
            Code::EqualsIgnoreCase | Code::Equals => "Field {0} should not be equals to {1}.",
            Code::NotMatch => "Field {0} does not match the expected format.",
            Code::LowerThan => "Field {0} should be greater than or equals to {1}.",
            Code::GreaterThan => "Field {0} should be lower than or equals to {1}.",
            Code::LowerOrEqual => "Field {0} should be greater than {1}.",
            Code::GreaterOrEqual => "Field {0} should be lower than {1}.",
            Code::NotInRange => "Field {0} should be between {1} and {2}.",
            Code::InRange => "Field {0} should not be between {1} and {2}.",
            Code::Zero => "Field {0} should not be zero.",
            Code::Null => "Field {0} should not be null.",
            Code::NotNull => "Field {0} should be equals to null.",
            Code::True => "Field {0} should be false.",
            Code::False => "Field {0} should be true.",
            Code::CollectionIsNull => "Field {0} should not be a null collection.",
            Code::CollectionIsNullOrEmpty => "Field {0} should not be a null or empty collection.",
            Code::CollectionIsEmpty => "Field {0} should not be an empty collection.",
            Code::EnumInvalid => "Field {0} should be a defined value.",
            Code::Custom => "Field {0} is invalid.",
        }
    }

    fn portuguese(self) -> &'static str {
        match self {
            Code::NullOrEmpty => "O campo {0} não deve ser nulo ou vazio.",
            Code::NullOrWhiteSpace => "O campo {0} não deve ser nulo, vazio ou conter apenas espaços.",
            Code::NotNullOrEmpty => "O campo {0} deve ser nulo ou vazio.",
            Code::NullOrInvalidLength => "O campo {0} deve ter entre {1} e {2} caracteres.",
            Code::LengthLowerThan => "O campo {0} deve ter no mínimo {1} caracteres.",
            Code::LengthGreaterThan => "O campo {0} deve ter no máximo {1} caracteres.",
            Code::LengthNotEqual => "O campo {0} deve ter exatamente {1} caracteres.",
            Code::NotEmail => "O campo {0} deve ser um e-mail válido.",
            Code::NotUrl => "O campo {0} deve ser uma URL válida.",
            Code::NotContains => "O campo {0} deve conter {1}.",
            Code::Contains => "O campo {0} não deve conter {1}.",
            Code::NotCpf => "O campo {0} deve ser um CPF válido.",
            Code::NotCnpj => "O campo {0} deve ser um CNPJ válido.",
            Code::NotGuid => "O campo {0} deve ser um GUID válido.",
            Code::NotDate => "O campo {0} deve ser uma data válida.",
            Code::NotEqualsIgnoreCase | Code::NotEquals => "O campo {0} deve ser igual a {1}.",
            Code::EqualsIgnoreCase | Code::Equals => "O campo {0} não deve ser igual a {1}.",
            Code::NotMatch => "O campo {0} não está no formato esperado.",
            Code::LowerThan => "O campo {0} deve ser maior ou igual a {1}.",
            Code::GreaterThan => "O campo {0} deve ser menor ou igual a {1}.",
            Code::LowerOrEqual => "O campo {0} deve ser maior que {1}.",
            Code::GreaterOrEqual => "O campo {0} deve ser menor que {1}.",
            Code::NotInRange => "O campo {0} deve estar entre {1} e {2}.",
            Code::InRange => "O campo {0} não deve estar entre {1} e {2}.",
            Code::Zero => "O campo {0} não deve ser zero.",
            Code::Null => "O campo {0} não deve ser nulo.",
            Code::NotNull => "O campo {0} deve ser nulo.",
            Code::True => "O campo {0} deve ser falso.",
            Code::False => "O campo {0} deve ser verdadeiro.",
            Code::CollectionIsNull => "A coleção {0} não deve ser nula.",
            Code::CollectionIsNullOrEmpty => "A coleção {0} não deve ser nula ou vazia.",
            Code::CollectionIsEmpty => "A coleção {0} não deve ser vazia.",
            Code::EnumInvalid => "O campo {0} deve ter um valor definido.",
            Code::Custom => "O campo {0} é inválido.",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fill the positional placeholders of `template` with `args`.
///
/// `{n}` is replaced by `args[n]`; `{{` and `}}` produce literal braces.
/// Format specifiers (`{0:N2}`) are not supported.
///
/// # Errors
///
/// [`Error::MissingArgument`] when a placeholder index has no argument and
/// [`Error::MalformedTemplate`] for unbalanced braces or non-numeric placeholders.
///
/// # Examples
///
/// ```
/// use notifiable::messages::render;
///
/// assert_eq!(render("{{{0}}}", &[&1]).unwrap(), "{1}");
/// assert!(render("{1}", &[&"only one"]).is_err());
/// ```
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String> {
    let malformed = || Error::MalformedTemplate {
        template: template.to_string(),
    };

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(d) if d.is_ascii_digit() => digits.push(d),
                        _ => return Err(malformed()),
                    }
                }
                let index: usize = digits.parse().map_err(|_| malformed())?;
                let arg = args.get(index).ok_or(Error::MissingArgument {
                    index,
                    provided: args.len(),
                })?;
                write!(out, "{}", arg).map_err(|_| malformed())?;
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(malformed()),
            other => out.push(other),
        }
    }

    Ok(out)
}
