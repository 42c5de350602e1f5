//! Payroll run orchestration.
//!
//! A run processes every employee for one pay period: calculate, then
//! disburse, recording a per-employee outcome either way. One employee's
//! failure never aborts the run; the remaining employees are still
//! attempted, and the period is marked completed exactly once after the
//! last attempt. A completed period refuses to run again, which is the
//! engine's double-payment guard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::calculate_for_employee;
use crate::config::TaxTables;
use crate::disbursement::{AchGateway, DisbursementRouter, WalletGateway};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DeductionDefinition, DisbursementResult, Employee, PayPeriod, PayrollCalculation,
    PeriodStatus, TimeEntry,
};

/// Source of employee records for a run.
#[allow(async_fn_in_trait)]
pub trait EmployeeDirectory {
    /// Fetches every employee to be paid in the given period.
    async fn employees(&self, period: &PayPeriod) -> EngineResult<Vec<Employee>>;
}

/// Source of time entries for hourly employees.
#[allow(async_fn_in_trait)]
pub trait TimeEntrySource {
    /// Fetches an employee's time entries within the period's date range.
    async fn entries(&self, employee_id: &str, period: &PayPeriod)
        -> EngineResult<Vec<TimeEntry>>;
}

/// Source of deduction definitions per employee.
#[allow(async_fn_in_trait)]
pub trait DeductionSource {
    /// Fetches the deduction definitions assigned to an employee.
    async fn deductions(&self, employee_id: &str) -> EngineResult<Vec<DeductionDefinition>>;
}

/// Writable view of pay period lifecycle state.
#[allow(async_fn_in_trait)]
pub trait PeriodStore {
    /// Marks a period completed after all disbursements were attempted.
    async fn mark_completed(&self, period_id: &str) -> EngineResult<()>;
}

/// A fully processed employee: the calculation and the disbursement
/// hand-off that followed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeOutcome {
    /// The employee that was paid.
    pub employee_id: String,
    /// The paycheck calculation.
    pub calculation: PayrollCalculation,
    /// The successful disbursement hand-off.
    pub disbursement: DisbursementResult,
}

/// An employee whose calculation or disbursement failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeFailure {
    /// The employee that could not be paid.
    pub employee_id: String,
    /// What went wrong.
    pub reason: String,
}

/// The outcome of one payroll run over a pay period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollRunSummary {
    /// Employees paid successfully.
    pub succeeded: Vec<EmployeeOutcome>,
    /// Employees that could not be paid, with reasons.
    pub failed: Vec<EmployeeFailure>,
}

/// Orchestrates calculation and disbursement across all employees of a
/// pay period.
#[derive(Debug, Clone)]
pub struct PayrollRunner<D, T, X, P, W, A> {
    directory: D,
    time_entries: T,
    deduction_source: X,
    periods: P,
    router: DisbursementRouter<W, A>,
}

impl<D, T, X, P, W, A> PayrollRunner<D, T, X, P, W, A>
where
    D: EmployeeDirectory,
    T: TimeEntrySource,
    X: DeductionSource,
    P: PeriodStore,
    W: WalletGateway,
    A: AchGateway,
{
    /// Creates a runner over the given collaborators.
    pub fn new(
        directory: D,
        time_entries: T,
        deduction_source: X,
        periods: P,
        router: DisbursementRouter<W, A>,
    ) -> Self {
        Self {
            directory,
            time_entries,
            deduction_source,
            periods,
            router,
        }
    }

    /// Runs payroll for a pay period.
    ///
    /// Fails fast if the period is already completed or the employee list
    /// cannot be fetched. Individual employee failures are collected in
    /// the summary instead. The period is marked completed once, after
    /// every employee has been attempted.
    pub async fn run(
        &self,
        period: &PayPeriod,
        tables: &TaxTables,
    ) -> EngineResult<PayrollRunSummary> {
        if period.status == PeriodStatus::Completed {
            return Err(EngineError::InvalidInput {
                field: "period".to_string(),
                message: format!("pay period '{}' is already completed", period.id),
            });
        }

        let employees = self.directory.employees(period).await?;
        info!(
            period_id = %period.id,
            employee_count = employees.len(),
            "starting payroll run"
        );

        let mut summary = PayrollRunSummary::default();
        for employee in &employees {
            match self.process_employee(employee, period, tables).await {
                Ok(outcome) => summary.succeeded.push(outcome),
                Err(reason) => {
                    warn!(
                        period_id = %period.id,
                        employee_id = %employee.id,
                        reason = %reason,
                        "employee payroll failed"
                    );
                    summary.failed.push(EmployeeFailure {
                        employee_id: employee.id.clone(),
                        reason,
                    });
                }
            }
        }

        self.periods.mark_completed(&period.id).await?;
        info!(
            period_id = %period.id,
            succeeded = summary.succeeded.len(),
            failed = summary.failed.len(),
            "payroll run completed"
        );

        Ok(summary)
    }

    async fn process_employee(
        &self,
        employee: &Employee,
        period: &PayPeriod,
        tables: &TaxTables,
    ) -> Result<EmployeeOutcome, String> {
        let entries = if employee.is_hourly() {
            self.time_entries
                .entries(&employee.id, period)
                .await
                .map_err(|e| e.to_string())?
        } else {
            Vec::new()
        };
        let deductions = self
            .deduction_source
            .deductions(&employee.id)
            .await
            .map_err(|e| e.to_string())?;

        let calculation =
            calculate_for_employee(employee, period, &entries, &deductions, tables)
                .map_err(|e| e.to_string())?;

        if calculation.net_pay <= Decimal::ZERO {
            return Err(format!(
                "net pay {} is not disbursable",
                calculation.net_pay
            ));
        }

        let disbursement = self
            .router
            .disburse(&employee.id, calculation.net_pay)
            .await;
        if !disbursement.success {
            return Err(disbursement
                .error
                .unwrap_or_else(|| "disbursement failed".to_string()));
        }

        Ok(EmployeeOutcome {
            employee_id: employee.id.clone(),
            calculation,
            disbursement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FederalTables, FicaTables, StateTables, TaxBracket, TaxTableMetadata,
    };
    use crate::disbursement::{AchSubmission, WalletGateway};
    use crate::models::{Compensation, FilingStatus, PayFrequency, WalletBalance};
    use chrono::{NaiveDate, Utc};
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_tables() -> TaxTables {
        let metadata = TaxTableMetadata {
            jurisdiction: "US".to_string(),
            tax_year: 2024,
            version: "2024.1".to_string(),
            source_url: "https://example.com".to_string(),
            valid_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        };
        let brackets = vec![TaxBracket {
            floor: Decimal::ZERO,
            rate: dec("0.10"),
            base: Decimal::ZERO,
        }];
        let federal = FederalTables {
            allowance_value: dec("4300"),
            single: brackets.clone(),
            married: brackets.clone(),
            head: brackets,
        };
        let state = StateTables {
            no_income_tax: vec!["TX".to_string()],
            flat_rates: HashMap::new(),
        };
        let fica = FicaTables {
            social_security_rate: dec("0.062"),
            social_security_wage_base: dec("160200"),
            medicare_rate: dec("0.0145"),
            additional_medicare_rate: dec("0.009"),
            additional_medicare_threshold: dec("200000"),
        };
        TaxTables::new(metadata, federal, state, fica)
    }

    fn create_test_period(status: PeriodStatus) -> PayPeriod {
        PayPeriod {
            id: "pp_001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
            pay_date: NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
            frequency: PayFrequency::BiWeekly,
            status,
        }
    }

    fn salaried(id: &str, work_state: &str) -> Employee {
        Employee {
            id: id.to_string(),
            compensation: Compensation::Salaried {
                annual_salary: dec("52000"),
            },
            work_state: work_state.to_string(),
            filing_status: FilingStatus::Single,
            allowances: 0,
            ytd_earnings: Decimal::ZERO,
        }
    }

    struct FakeDirectory {
        employees: Option<Vec<Employee>>,
    }

    impl EmployeeDirectory for FakeDirectory {
        async fn employees(&self, _period: &PayPeriod) -> EngineResult<Vec<Employee>> {
            self.employees
                .clone()
                .ok_or_else(|| EngineError::DataUnavailable {
                    resource: "employee_directory".to_string(),
                    message: "timeout".to_string(),
                })
        }
    }

    struct FakeEntries;

    impl TimeEntrySource for FakeEntries {
        async fn entries(
            &self,
            _employee_id: &str,
            _period: &PayPeriod,
        ) -> EngineResult<Vec<TimeEntry>> {
            Ok(Vec::new())
        }
    }

    struct FakeDeductions;

    impl DeductionSource for FakeDeductions {
        async fn deductions(&self, _employee_id: &str) -> EngineResult<Vec<DeductionDefinition>> {
            Ok(Vec::new())
        }
    }

    struct FakePeriods {
        completed: Mutex<Vec<String>>,
    }

    impl FakePeriods {
        fn new() -> Self {
            Self {
                completed: Mutex::new(Vec::new()),
            }
        }
    }

    impl PeriodStore for &FakePeriods {
        async fn mark_completed(&self, period_id: &str) -> EngineResult<()> {
            self.completed.lock().unwrap().push(period_id.to_string());
            Ok(())
        }
    }

    struct FakeWallet {
        transfers: AtomicU32,
    }

    impl WalletGateway for &FakeWallet {
        async fn balance(&self) -> EngineResult<WalletBalance> {
            Ok(WalletBalance {
                amount: dec("1000000"),
                currency: "USD".to_string(),
                as_of: Utc::now(),
            })
        }

        async fn transfer(&self, _employee_id: &str, _amount: Decimal) -> EngineResult<String> {
            let n = self.transfers.fetch_add(1, Ordering::SeqCst);
            Ok(format!("wtxn_{:03}", n))
        }
    }

    struct FakeAch;

    impl AchGateway for FakeAch {
        async fn submit(&self, _employee_id: &str, _amount: Decimal) -> EngineResult<AchSubmission> {
            Ok(AchSubmission {
                transaction_id: "atxn_001".to_string(),
                status: "approved".to_string(),
            })
        }
    }

    fn runner<'a>(
        employees: Option<Vec<Employee>>,
        periods: &'a FakePeriods,
        wallet: &'a FakeWallet,
    ) -> PayrollRunner<FakeDirectory, FakeEntries, FakeDeductions, &'a FakePeriods, &'a FakeWallet, FakeAch>
    {
        PayrollRunner::new(
            FakeDirectory { employees },
            FakeEntries,
            FakeDeductions,
            periods,
            DisbursementRouter::new(wallet, FakeAch),
        )
    }

    #[tokio::test]
    async fn test_run_pays_all_employees() {
        let periods = FakePeriods::new();
        let wallet = FakeWallet {
            transfers: AtomicU32::new(0),
        };
        let runner = runner(
            Some(vec![salaried("emp_001", "TX"), salaried("emp_002", "TX")]),
            &periods,
            &wallet,
        );
        let period = create_test_period(PeriodStatus::Pending);

        let summary = runner.run(&period, &create_test_tables()).await.unwrap();

        assert_eq!(summary.succeeded.len(), 2);
        assert!(summary.failed.is_empty());
        assert_eq!(wallet.transfers.load(Ordering::SeqCst), 2);
        assert_eq!(*periods.completed.lock().unwrap(), vec!["pp_001"]);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_run() {
        let periods = FakePeriods::new();
        let wallet = FakeWallet {
            transfers: AtomicU32::new(0),
        };
        // The middle employee has an unknown work state.
        let runner = runner(
            Some(vec![
                salaried("emp_001", "TX"),
                salaried("emp_002", "ZZ"),
                salaried("emp_003", "TX"),
            ]),
            &periods,
            &wallet,
        );
        let period = create_test_period(PeriodStatus::Pending);

        let summary = runner.run(&period, &create_test_tables()).await.unwrap();

        assert_eq!(summary.succeeded.len(), 2);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].employee_id, "emp_002");
        assert!(summary.failed[0].reason.contains("ZZ"));
        // The period is still marked completed after partial failure.
        assert_eq!(periods.completed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_completed_period_refuses_to_run() {
        let periods = FakePeriods::new();
        let wallet = FakeWallet {
            transfers: AtomicU32::new(0),
        };
        let runner = runner(Some(vec![salaried("emp_001", "TX")]), &periods, &wallet);
        let period = create_test_period(PeriodStatus::Completed);

        let result = runner.run(&period, &create_test_tables()).await;

        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidInput { .. }
        ));
        assert_eq!(wallet.transfers.load(Ordering::SeqCst), 0);
        assert!(periods.completed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_directory_failure_aborts_the_run() {
        let periods = FakePeriods::new();
        let wallet = FakeWallet {
            transfers: AtomicU32::new(0),
        };
        let runner = runner(None, &periods, &wallet);
        let period = create_test_period(PeriodStatus::Pending);

        let result = runner.run(&period, &create_test_tables()).await;

        assert!(matches!(
            result.unwrap_err(),
            EngineError::DataUnavailable { .. }
        ));
        assert!(periods.completed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_serializes() {
        let summary = PayrollRunSummary::default();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"succeeded\":[]"));
        assert!(json.contains("\"failed\":[]"));
    }
}
