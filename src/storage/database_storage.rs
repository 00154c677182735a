use chrono::NaiveDate;
use log::{debug, error, info};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait,
    Database, DatabaseConnection, EntityTrait, QueryOrder,
};

use crate::error_handling::types::StorageError;
use crate::storage::db_entities::{self, ActiveModel, Column, Entity};
use crate::storage::storage_trait::EmployeeStorage;
use crate::storage::types::{Employee, EmployeeFields, EmployeeId, Salary, DATE_FORMAT};

const CREATE_EMPLOYEES_TABLE: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    date_of_birth TEXT NOT NULL,
    department TEXT NOT NULL,
    salary_cents INTEGER NOT NULL,
    hire_date TEXT NOT NULL
);";

fn parse_date(column: &str, value: &str) -> Result<NaiveDate, StorageError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        error!("Invalid {} '{}' in employees table: {}", column, value, e);
        StorageError::ReadFailed
    })
}

impl db_entities::Model {
    fn into_employee(self) -> Result<Employee, StorageError> {
        let salary = Salary::from_cents(self.salary_cents).ok_or_else(|| {
            error!("Invalid salary_cents {} for employee {}", self.salary_cents, self.id);
            StorageError::ReadFailed
        })?;
        Ok(Employee {
            id: self.id,
            fields: EmployeeFields {
                date_of_birth: parse_date("date_of_birth", &self.date_of_birth)?,
                hire_date: parse_date("hire_date", &self.hire_date)?,
                name: self.name,
                email: self.email,
                department: self.department,
                salary,
            },
        })
    }
}

/// Copies every field onto the active model, so an update is always a full overwrite.
fn assign_fields(active: &mut ActiveModel, fields: EmployeeFields) {
    active.name = Set(fields.name);
    active.email = Set(fields.email);
    active.date_of_birth = Set(fields.date_of_birth.format(DATE_FORMAT).to_string());
    active.department = Set(fields.department);
    active.salary_cents = Set(fields.salary.cents());
    active.hire_date = Set(fields.hire_date.format(DATE_FORMAT).to_string());
}

/// SQLite-backed employee store using SeaORM.
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    /// Default database filename used in the application's working directory
    pub const DEFAULT_DB_FILE: &'static str = "roster.sqlite3";

    /// Connects to `url` and makes sure the `employees` table exists.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let mut opts = ConnectOptions::new(url.to_owned());
        if url.contains(":memory:") || url.contains("mode=memory") {
            // every pooled connection would otherwise see its own empty database
            opts.max_connections(1).min_connections(1);
        } else {
            opts.max_connections(5);
        }
        opts.sqlx_logging(false);

        let db = Database::connect(opts).await.map_err(|e| {
            error!("Failed to connect to database {}: {}", url, e);
            StorageError::ConnectionFailed
        })?;
        db.execute_unprepared(CREATE_EMPLOYEES_TABLE)
            .await
            .map_err(|e| {
                error!("Failed to create employees table: {}", e);
                StorageError::WriteFailed
            })?;
        info!("DatabaseStorage initialized at {}", url);
        Ok(Self { db })
    }

    /// Private database that lives as long as this value.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, StorageError> {
        Self::connect("sqlite::memory:").await
    }

    async fn find_model(&self, id: EmployeeId) -> Result<db_entities::Model, StorageError> {
        Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load employee {}: {}", id, e);
                StorageError::ReadFailed
            })?
            .ok_or(StorageError::NotFound)
    }
}

impl EmployeeStorage for DatabaseStorage {
    async fn list_employees(&self) -> Result<Vec<Employee>, StorageError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list employees: {}", e);
                StorageError::ReadFailed
            })?;
        debug!("Loaded {} employees", rows.len());
        rows.into_iter().map(db_entities::Model::into_employee).collect()
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, StorageError> {
        self.find_model(id).await?.into_employee()
    }

    async fn create_employee(&self, fields: EmployeeFields) -> Result<Employee, StorageError> {
        let mut active = ActiveModel::new();
        assign_fields(&mut active, fields);
        let model = active.insert(&self.db).await.map_err(|e| {
            error!("Failed to insert employee: {}", e);
            StorageError::WriteFailed
        })?;
        info!("Created employee {}", model.id);
        model.into_employee()
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Employee, StorageError> {
        let mut active: ActiveModel = self.find_model(id).await?.into();
        assign_fields(&mut active, fields);
        let model = active.update(&self.db).await.map_err(|e| {
            error!("Failed to update employee {}: {}", id, e);
            StorageError::WriteFailed
        })?;
        info!("Updated employee {}", id);
        model.into_employee()
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), StorageError> {
        let result = Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete employee {}: {}", id, e);
                StorageError::WriteFailed
            })?;
        if result.rows_affected == 0 {
            return Err(StorageError::NotFound);
        }
        info!("Deleted employee {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fields(name: &str) -> EmployeeFields {
        EmployeeFields {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            department: "Engineering".into(),
            salary: "52000.50".parse().unwrap(),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_db_create_and_list() {
        let storage = DatabaseStorage::in_memory().await.unwrap();
        assert!(storage.list_employees().await.unwrap().is_empty());

        let alice = storage.create_employee(fields("Alice")).await.unwrap();
        let bob = storage.create_employee(fields("Bob")).await.unwrap();
        assert_ne!(alice.id, bob.id);

        let all = storage.list_employees().await.unwrap();
        assert_eq!(all, vec![alice.clone(), bob]);
        assert_eq!(all[0].fields, fields("Alice"));
    }

    #[tokio::test]
    async fn test_db_update_overwrites_everything() {
        let storage = DatabaseStorage::in_memory().await.unwrap();
        let created = storage.create_employee(fields("Alice")).await.unwrap();

        let mut replacement = fields("Carol");
        replacement.department = "Sales".into();
        replacement.salary = "1.05".parse().unwrap();
        replacement.hire_date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let updated = storage
            .update_employee(created.id, replacement.clone())
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields, replacement);
        assert_eq!(
            storage.get_employee(created.id).await.unwrap().fields,
            replacement
        );
    }

    #[tokio::test]
    async fn test_db_missing_records() {
        let storage = DatabaseStorage::in_memory().await.unwrap();
        assert_eq!(storage.get_employee(42).await, Err(StorageError::NotFound));
        assert_eq!(
            storage.update_employee(42, fields("Nobody")).await,
            Err(StorageError::NotFound)
        );
        assert_eq!(storage.delete_employee(42).await, Err(StorageError::NotFound));
    }

    #[tokio::test]
    async fn test_db_delete_twice() {
        let storage = DatabaseStorage::in_memory().await.unwrap();
        let created = storage.create_employee(fields("Alice")).await.unwrap();
        storage.delete_employee(created.id).await.unwrap();
        assert!(storage.list_employees().await.unwrap().is_empty());
        assert_eq!(
            storage.delete_employee(created.id).await,
            Err(StorageError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_db_file_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("test.sqlite3").display()
        );

        let id = {
            let storage = DatabaseStorage::connect(&url).await.unwrap();
            storage.create_employee(fields("Alice")).await.unwrap().id
        };

        let reopened = DatabaseStorage::connect(&url).await.unwrap();
        let employee = reopened.get_employee(id).await.unwrap();
        assert_eq!(employee.fields, fields("Alice"));
    }
}
