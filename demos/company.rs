//! Decoding a nested record from a single slash-delimited string.
//!
//! `"CatWorld/3/tama/5/mike/6/kuro/7"` reads as: a company name, an employee
//! count, then name/age pairs for each employee.
//!
//! Run with: cargo run --example company

use slashload::{load, Decoder, IntDecoder, Result, SeqDecoder, TextDecoder, TokenStream};
use std::fmt;

#[derive(Debug)]
struct Employee {
    name: String,
    age: i64,
}

#[derive(Debug)]
struct Company {
    name: String,
    employees: Vec<Employee>,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(name={}, age={})", self.name, self.age)
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(name={}, employees=[", self.name)?;
        for (i, employee) in self.employees.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", employee)?;
        }
        write!(f, "])")
    }
}

struct EmployeeDecoder;

impl Decoder for EmployeeDecoder {
    type Value = Employee;

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Employee> {
        Ok(Employee {
            name: TextDecoder.decode(stream)?,
            age: IntDecoder.decode(stream)?,
        })
    }
}

struct CompanyDecoder;

impl Decoder for CompanyDecoder {
    type Value = Company;

    fn decode(&self, stream: &mut TokenStream<'_>) -> Result<Company> {
        Ok(Company {
            name: TextDecoder.decode(stream)?,
            employees: SeqDecoder::new(EmployeeDecoder).decode(stream)?,
        })
    }
}

fn main() -> Result<()> {
    let company = load("CatWorld/3/tama/5/mike/6/kuro/7", &CompanyDecoder)?;
    println!("{}", company);

    Ok(())
}
