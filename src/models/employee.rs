use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Salutation {
    #[default]
    #[serde(rename = "Dr.")]
    Dr,
    #[serde(rename = "Mr.")]
    Mr,
    #[serde(rename = "Ms.")]
    Ms,
    #[serde(rename = "Mrs.")]
    Mrs,
    #[serde(rename = "Mx.")]
    Mx,
}

impl Salutation {
    pub const ALL: [Salutation; 5] = [
        Salutation::Dr,
        Salutation::Mr,
        Salutation::Ms,
        Salutation::Mrs,
        Salutation::Mx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Salutation::Dr => "Dr.",
            Salutation::Mr => "Mr.",
            Salutation::Ms => "Ms.",
            Salutation::Mrs => "Mrs.",
            Salutation::Mx => "Mx.",
        }
    }

    pub fn parse(value: &str) -> Option<Salutation> {
        Salutation::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unspecified];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unspecified => "Unspecified",
        }
    }

    pub fn parse(value: &str) -> Option<Gender> {
        Gender::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// Profile colour tags, declared in checkbox order. `Ord` follows that order,
/// so a `BTreeSet<ProfileColor>` joins the same way the form lists them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileColor {
    Green,
    Blue,
    Red,
    Default,
}

impl ProfileColor {
    pub const ALL: [ProfileColor; 4] = [
        ProfileColor::Green,
        ProfileColor::Blue,
        ProfileColor::Red,
        ProfileColor::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileColor::Green => "Green",
            ProfileColor::Blue => "Blue",
            ProfileColor::Red => "Red",
            ProfileColor::Default => "Default",
        }
    }

    pub fn parse(value: &str) -> Option<ProfileColor> {
        ProfileColor::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for ProfileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins tags with commas, `None` when the set is empty.
pub fn join_profile_colors(colors: &BTreeSet<ProfileColor>) -> Option<String> {
    if colors.is_empty() {
        return None;
    }
    let joined = colors
        .iter()
        .map(ProfileColor::as_str)
        .collect::<Vec<_>>()
        .join(",");
    Some(joined)
}

/// Splits a stored comma-joined string. Unknown tags are dropped.
pub fn parse_profile_colors(stored: &str) -> BTreeSet<ProfileColor> {
    stored
        .split(',')
        .filter_map(|tag| ProfileColor::parse(tag.trim()))
        .collect()
}

pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub salutation: Salutation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_color: Option<String>,
    pub gender: Gender,
    pub full_name: String,
    pub gross_salary: String,
}

impl Employee {
    pub fn profile_colors(&self) -> BTreeSet<ProfileColor> {
        self.profile_color
            .as_deref()
            .map(parse_profile_colors)
            .unwrap_or_default()
    }
}

/// Candidate record assembled from the form, before the store assigns an id.
/// Names and salary are already masked by the form, and any of them may be
/// empty; only the gender is checked here.
#[derive(Validate, Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub salutation: Salutation,
    #[validate(required(message = "gender must be chosen"))]
    pub gender: Option<Gender>,
    pub gross_salary: String,
    pub profile_colors: BTreeSet<ProfileColor>,
}

impl NewEmployee {
    /// Builds the wire record. `None` when no gender was chosen, which
    /// `validate` reports first.
    pub fn into_employee(self) -> Option<Employee> {
        let gender = self.gender?;
        Some(Employee {
            id: None,
            full_name: full_name(&self.first_name, &self.last_name),
            profile_color: join_profile_colors(&self.profile_colors),
            first_name: self.first_name,
            last_name: self.last_name,
            salutation: self.salutation,
            gender,
            gross_salary: self.gross_salary,
        })
    }
}
