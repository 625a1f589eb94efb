#[cfg(test)]
mod tests {
    use emsys::db::employees::Employees;
    use emsys::libs::employee::{Employee, EmployeeFilter, EmployeeUpdate};
    use emsys::libs::error::EmsError;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EmployeeTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for EmployeeTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("employees.sqlite3");
            EmployeeTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl EmployeeTestContext {
        fn open(&self) -> Employees {
            Employees::open(&self.db_path).unwrap()
        }
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_ids_are_sequential_from_empty(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        assert_eq!(employees.next_id(), 1);

        for i in 1..=5 {
            let id = employees.add(&format!("Employee {}", i), "Eng", 1000.0 * i as f64).unwrap();
            assert_eq!(id, i);
        }
        assert_eq!(employees.next_id(), 6);
        assert_eq!(employees.list_all().unwrap().len(), 5);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_deleted_id_is_not_reused(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        employees.add("Alice", "Eng", 90000.0).unwrap();
        employees.add("Bob", "Sales", 60000.0).unwrap();
        employees.add("Carol", "Ops", 70000.0).unwrap();

        employees.delete(3).unwrap();
        assert!(employees.get(3).unwrap().is_none());

        let id = employees.add("Dave", "Ops", 50000.0).unwrap();
        assert_eq!(id, 4);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_reopen_resumes_after_highest_id(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        employees.add("Alice", "Eng", 90000.0).unwrap();
        employees.add("Bob", "Sales", 60000.0).unwrap();
        employees.add("Carol", "Ops", 70000.0).unwrap();
        employees.delete(1).unwrap();
        employees.close().unwrap();

        let mut employees = ctx.open();
        assert_eq!(employees.next_id(), 4);
        assert_eq!(employees.add("Dave", "Ops", 50000.0).unwrap(), 4);
        assert_eq!(employees.get(2).unwrap().unwrap().name, "Bob");
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_next_id_is_read_from_table_on_open(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        employees.add("Alice", "Eng", 90000.0).unwrap();
        employees.add("Bob", "Sales", 60000.0).unwrap();
        employees.delete(2).unwrap();
        employees.close().unwrap();

        // Only the in-memory counter remembers issued ids; the table does not.
        let employees = ctx.open();
        assert_eq!(employees.next_id(), 2);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_ensure_schema_is_idempotent(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        employees.add("Alice", "Eng", 90000.0).unwrap();

        employees.ensure_schema().unwrap();
        employees.ensure_schema().unwrap();

        assert_eq!(employees.list_all().unwrap(), vec![Employee::new(1, "Alice", "Eng", 90000.0)]);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_salary_range_is_inclusive(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        for (name, salary) in [("A", 40000.0), ("B", 50000.0), ("C", 60000.0), ("D", 70000.0), ("E", 80000.0)] {
            employees.add(name, "Eng", salary).unwrap();
        }

        let in_range = employees.filter_by_salary_range(50000.0, 70000.0).unwrap();
        let mut names: Vec<String> = in_range.iter().map(|e| e.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["B", "C", "D"]);
        assert!(in_range.iter().all(|e| e.salary >= 50000.0 && e.salary <= 70000.0));

        assert_eq!(employees.filter_by_salary_range(80000.0, 80000.0).unwrap().len(), 1);
        assert!(employees.filter_by_salary_range(90000.0, 100000.0).unwrap().is_empty());
        assert!(employees.filter_by_salary_range(70000.0, 50000.0).unwrap().is_empty());
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_department_filter_is_exact(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        employees.add("Alice", "Eng", 90000.0).unwrap();
        employees.add("Bob", "eng", 60000.0).unwrap();
        employees.add("Carol", "Engineering", 70000.0).unwrap();

        let eng = employees.filter_by_department("Eng").unwrap();
        assert_eq!(eng, vec![Employee::new(1, "Alice", "Eng", 90000.0)]);
        assert!(employees.filter_by_department("Marketing").unwrap().is_empty());

        let via_fetch = employees.fetch(EmployeeFilter::ByDepartment("eng".to_string())).unwrap();
        assert_eq!(via_fetch[0].name, "Bob");
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_update_only_salary(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        let id = employees.add("Alice", "Eng", 90000.0).unwrap();

        let updated = employees.update(id, &EmployeeUpdate::salary(95000.0)).unwrap();
        assert_eq!(updated, Employee::new(id, "Alice", "Eng", 95000.0));
        assert_eq!(employees.get(id).unwrap().unwrap(), updated);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_update_name_and_department(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        let id = employees.add("Alice", "Eng", 90000.0).unwrap();

        let update = EmployeeUpdate {
            name: Some("Alicia".to_string()),
            department: Some("Research".to_string()),
            salary: None,
        };
        let updated = employees.update(id, &update).unwrap();
        assert_eq!(updated, Employee::new(id, "Alicia", "Research", 90000.0));
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_missing_ids_are_not_found(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        employees.add("Alice", "Eng", 90000.0).unwrap();

        assert!(employees.get(42).unwrap().is_none());
        assert!(matches!(employees.update(42, &EmployeeUpdate::salary(1.0)), Err(EmsError::NotFound(42))));
        assert!(matches!(employees.update(42, &EmployeeUpdate::default()), Err(EmsError::NotFound(42))));
        assert!(matches!(employees.delete(42), Err(EmsError::NotFound(42))));
        assert_eq!(employees.list_all().unwrap().len(), 1);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_invalid_values_are_rejected(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();

        assert!(matches!(employees.add("Alice", "Eng", -1.0), Err(EmsError::Validation { field: "salary", .. })));
        assert!(matches!(employees.add("Alice", "Eng", f64::NAN), Err(EmsError::Validation { .. })));
        assert!(matches!(employees.add("", "Eng", 1.0), Err(EmsError::Validation { field: "name", .. })));
        assert!(matches!(employees.add("Alice", "  ", 1.0), Err(EmsError::Validation { field: "department", .. })));
        assert_eq!(employees.next_id(), 1);

        let id = employees.add("Alice", "Eng", 0.0).unwrap();
        assert_eq!(id, 1);
        assert!(matches!(employees.update(id, &EmployeeUpdate::salary(-5.0)), Err(EmsError::Validation { .. })));
        assert_eq!(employees.get(id).unwrap().unwrap().salary, 0.0);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_average_salary(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();
        employees.add("Alice", "Engineering", 50000.0).unwrap();
        employees.add("Bob", "Engineering", 70000.0).unwrap();
        employees.add("Carol", "Sales", 10000.0).unwrap();

        let average = employees.average_salary("Engineering").unwrap().unwrap();
        assert!((average - 60000.0).abs() < 1e-9);
        assert_eq!(employees.average_salary("Marketing").unwrap(), None);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_example_scenario(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.open();

        assert_eq!(employees.add("Alice", "Eng", 90000.0).unwrap(), 1);
        assert_eq!(employees.add("Bob", "Sales", 60000.0).unwrap(), 2);
        assert_eq!(
            employees.filter_by_department("Eng").unwrap(),
            vec![Employee::new(1, "Alice", "Eng", 90000.0)]
        );

        employees.delete(1).unwrap();
        assert!(employees.get(1).unwrap().is_none());
        assert_eq!(employees.average_salary("Eng").unwrap(), None);
    }

    #[test]
    fn test_in_memory_store() {
        let mut employees = Employees::open_in_memory().unwrap();
        assert_eq!(employees.add("Alice", "Eng", 90000.0).unwrap(), 1);
        assert_eq!(employees.list_all().unwrap().len(), 1);
        employees.close().unwrap();
    }
}
