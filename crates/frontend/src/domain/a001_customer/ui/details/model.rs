use std::collections::{BTreeMap, BTreeSet};

use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::a002_lookup::aggregate::LookupItem;

use super::cascade::LocationCascade;
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{date_input_to_iso, to_date_input};

pub const INVALID_FORM: &str = "Please fill in all required fields correctly";
pub const LOOKUPS_ERROR: &str = "Failed to load form data. Please refresh the page.";
pub const CUSTOMER_LOAD_ERROR: &str = "Failed to load customer data. Please try again.";

const FULL_NAME_MIN: usize = 2;
const NATIONAL_ID_DIGITS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Submitting,
    SubmitSucceeded,
    SubmitFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    NationalId,
    Gender,
    Governorate,
    District,
    Village,
    BirthDate,
    Salary,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FullName,
        Field::NationalId,
        Field::Gender,
        Field::Governorate,
        Field::District,
        Field::Village,
        Field::BirthDate,
        Field::Salary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::NationalId => "National ID",
            Field::Gender => "Gender",
            Field::Governorate => "Governorate",
            Field::District => "District",
            Field::Village => "Village",
            Field::BirthDate => "Birth Date",
            Field::Salary => "Salary",
        }
    }

    fn required(self) -> String {
        format!("{} is required", self.label())
    }

    fn invalid(self) -> String {
        format!("Invalid {}", self.label().to_lowercase())
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check(&mut self, field: Field, error: Option<String>) {
        if let Some(message) = error {
            self.0.insert(field, message);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A save is already in flight or done
    Busy,
    Invalid,
}

/// Editable customer form, one instance per page visit
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerForm {
    pub phase: FormPhase,
    /// Set when editing an existing customer
    pub id: Option<String>,

    pub full_name: String,
    pub national_id: String,
    pub gender: String,
    /// `YYYY-MM-DD` as used by the date input
    pub birth_date: String,
    /// Raw salary input
    pub salary: String,

    pub genders: Vec<LookupItem>,
    pub location: LocationCascade,

    touched: BTreeSet<Field>,
}

impl CustomerForm {
    pub fn new(id: Option<String>) -> Self {
        Self {
            phase: FormPhase::Loading,
            id: id.filter(|id| !id.trim().is_empty()),
            full_name: String::new(),
            national_id: String::new(),
            gender: String::new(),
            birth_date: String::new(),
            salary: "0".to_string(),
            genders: Vec::new(),
            location: LocationCascade::default(),
            touched: BTreeSet::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.phase, FormPhase::Ready | FormPhase::SubmitFailed)
    }

    pub fn apply_base_lookups(&mut self, genders: Vec<LookupItem>, governorates: Vec<LookupItem>) {
        self.genders = genders;
        self.location.set_governorates(governorates);
    }

    /// Fills every field from a stored customer without cascading
    pub fn prefill(
        &mut self,
        customer: &CustomerDto,
        districts: Vec<LookupItem>,
        villages: Vec<LookupItem>,
    ) {
        self.id = Some(customer.id.clone());
        self.full_name = customer.full_name.clone();
        self.national_id = customer.national_id.clone();
        self.gender = customer.gender_id.clone();
        self.birth_date = to_date_input(&customer.birth_date);
        self.salary = customer.salary.to_string();
        self.location.prefill(
            &customer.governorate_id,
            &customer.district_id,
            &customer.village_id,
            districts,
            villages,
        );
    }

    /// Leaves the loading phase; the form stays usable after a load failure
    pub fn ready(&mut self) {
        if self.phase == FormPhase::Loading {
            self.phase = FormPhase::Ready;
        }
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let full_name = self.full_name.trim();
        errors.check(
            Field::FullName,
            if full_name.is_empty() {
                Some(Field::FullName.required())
            } else if full_name.chars().count() < FULL_NAME_MIN {
                Some(format!(
                    "{} must be at least {} characters",
                    Field::FullName.label(),
                    FULL_NAME_MIN
                ))
            } else {
                None
            },
        );

        let national_id = self.national_id.trim();
        errors.check(
            Field::NationalId,
            if national_id.is_empty() {
                Some(Field::NationalId.required())
            } else if national_id.len() != NATIONAL_ID_DIGITS
                || !national_id.chars().all(|c| c.is_ascii_digit())
            {
                Some("National ID must be exactly 14 digits".to_string())
            } else {
                None
            },
        );

        let selections = [
            (Field::Gender, self.gender.as_str()),
            (Field::Governorate, self.location.governorate.as_str()),
            (Field::District, self.location.districts.selected.as_str()),
            (Field::Village, self.location.villages.selected.as_str()),
        ];
        for (field, value) in selections {
            errors.check(field, value.is_empty().then(|| field.required()));
        }

        errors.check(
            Field::BirthDate,
            if self.birth_date.trim().is_empty() {
                Some(Field::BirthDate.required())
            } else if date_input_to_iso(&self.birth_date).is_none() {
                Some(Field::BirthDate.invalid())
            } else {
                None
            },
        );

        errors.check(
            Field::Salary,
            match parse_salary(&self.salary) {
                SalaryInput::Missing => Some(Field::Salary.required()),
                SalaryInput::Invalid => Some(Field::Salary.invalid()),
                SalaryInput::Value(v) if v < 0.0 => {
                    Some(format!("{} must be at least 0", Field::Salary.label()))
                }
                SalaryInput::Value(_) => None,
            },
        );

        errors
    }

    /// Message to show under `field`, once the user has touched it
    pub fn error_for(&self, field: Field) -> Option<String> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.validate().get(field).map(str::to_string)
    }

    /// Validates and builds the save payload
    ///
    /// Every field is marked touched so all messages become visible.
    pub fn begin_submit(&mut self) -> Result<Customer, SubmitBlocked> {
        if !self.is_editable() {
            return Err(SubmitBlocked::Busy);
        }
        self.touched.extend(Field::ALL);

        if !self.validate().is_empty() {
            return Err(SubmitBlocked::Invalid);
        }
        let (Some(birth_date), SalaryInput::Value(salary)) =
            (date_input_to_iso(&self.birth_date), parse_salary(&self.salary))
        else {
            return Err(SubmitBlocked::Invalid);
        };

        self.phase = FormPhase::Submitting;
        Ok(Customer {
            id: self.id.clone(),
            full_name: self.full_name.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            gender_id: self.gender.clone(),
            governorate_id: self.location.governorate.clone(),
            district_id: self.location.districts.selected.clone(),
            village_id: self.location.villages.selected.clone(),
            birth_date,
            salary,
        })
    }

    /// Records the save outcome; `Ok` carries the success banner text
    pub fn finish_submit(
        &mut self,
        result: Result<CustomerDto, ApiError>,
    ) -> Result<&'static str, String> {
        match result {
            Ok(saved) => {
                log::info!("customer saved: {}", saved.id);
                self.phase = FormPhase::SubmitSucceeded;
                Ok(if self.is_edit() {
                    "Customer updated successfully!"
                } else {
                    "Customer created successfully!"
                })
            }
            Err(e) => {
                log::error!("customer save failed: {}", e);
                self.phase = FormPhase::SubmitFailed;
                Err(e.message_or(if self.is_edit() {
                    "Failed to update customer."
                } else {
                    "Failed to create customer."
                }))
            }
        }
    }
}

enum SalaryInput {
    Missing,
    Invalid,
    Value(f64),
}

fn parse_salary(raw: &str) -> SalaryInput {
    let raw = raw.trim();
    if raw.is_empty() {
        return SalaryInput::Missing;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => SalaryInput::Value(v),
        _ => SalaryInput::Invalid,
    }
}
