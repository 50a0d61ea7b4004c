//! Employee Repository

use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

use super::{Page, Pagination, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::store::StoreHandle;

/// Active-status filter for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    Active,
    Inactive,
    #[default]
    All,
}

impl StatusFilter {
    fn matches(&self, employee: &Employee) -> bool {
        match self {
            StatusFilter::Active => employee.is_active,
            StatusFilter::Inactive => !employee.is_active,
            StatusFilter::All => true,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            "all" => Ok(StatusFilter::All),
            _ => Err(()),
        }
    }
}

/// Listing parameters
///
/// `page`/`per_page` arrive already normalized from the handler boundary
/// (both >= 1); the repository applies them as-is.
#[derive(Debug, Clone)]
pub struct EmployeeQuery {
    pub page: usize,
    pub per_page: usize,
    pub search: String,
    pub status: StatusFilter,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: String::new(),
            status: StatusFilter::All,
        }
    }
}

#[derive(Clone)]
pub struct EmployeeRepository {
    store: StoreHandle<Employee>,
}

impl EmployeeRepository {
    pub fn new(store: StoreHandle<Employee>) -> Self {
        Self { store }
    }

    /// Case-insensitive substring match across the searchable text fields.
    /// A record matches when any field contains the term.
    fn matches_search(employee: &Employee, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        [
            &employee.full_name,
            &employee.username,
            &employee.email,
            &employee.department,
            &employee.position,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
    }

    /// List employees with search, status filter, and pagination
    ///
    /// Results keep the collection's insertion order; `totalPages` is
    /// computed over the matched set, not the whole collection.
    pub async fn find_all(&self, query: &EmployeeQuery) -> RepoResult<Page<Employee>> {
        let employees = self.store.load().await?;

        let term = query.search.trim().to_lowercase();
        let matched: Vec<Employee> = employees
            .into_iter()
            .filter(|e| query.status.matches(e) && Self::matches_search(e, &term))
            .collect();

        // per_page >= 1 is the boundary's contract; guard the arithmetic anyway
        let per_page = query.per_page.max(1);
        let total = matched.len();
        let total_pages = total.div_ceil(per_page);
        let offset = query.page.saturating_sub(1) * per_page;
        let data = matched.into_iter().skip(offset).take(per_page).collect();

        Ok(Page {
            data,
            pagination: Pagination {
                page: query.page,
                per_page,
                total,
                total_pages,
            },
        })
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employees = self.store.load().await?;
        Ok(employees.into_iter().find(|e| e.id == id))
    }

    /// Find employee by username (case-sensitive exact match)
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>> {
        let employees = self.store.load().await?;
        Ok(employees.into_iter().find(|e| e.username == username))
    }

    /// Find employee by email (case-sensitive exact match)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let employees = self.store.load().await?;
        Ok(employees.into_iter().find(|e| e.email == email))
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let mut employees = self.store.load().await?;

        if employees.iter().any(|e| e.username == data.username) {
            return Err(RepoError::Duplicate("Username already exists".to_string()));
        }
        if employees.iter().any(|e| e.email == data.email) {
            return Err(RepoError::Duplicate("Email already exists".to_string()));
        }

        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            full_name: data.full_name,
            username: data.username,
            email: data.email,
            phone: data.phone,
            position: data.position,
            department: data.department,
            avatar_url: data.avatar_url,
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        employees.push(employee.clone());
        self.store.save(&employees).await?;
        Ok(employee)
    }

    /// Update an employee with merge semantics; absent fields stay untouched
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let mut employees = self.store.load().await?;

        let index = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;

        // Uniqueness checks exclude the record being updated
        if let Some(ref username) = data.username
            && employees.iter().any(|e| e.id != id && &e.username == username)
        {
            return Err(RepoError::Duplicate("Username already exists".to_string()));
        }
        if let Some(ref email) = data.email
            && employees.iter().any(|e| e.id != id && &e.email == email)
        {
            return Err(RepoError::Duplicate("Email already exists".to_string()));
        }

        let employee = &mut employees[index];
        if let Some(full_name) = data.full_name {
            employee.full_name = full_name;
        }
        if let Some(username) = data.username {
            employee.username = username;
        }
        if let Some(email) = data.email {
            employee.email = email;
        }
        if let Some(phone) = data.phone {
            employee.phone = phone;
        }
        if let Some(position) = data.position {
            employee.position = position;
        }
        if let Some(department) = data.department {
            employee.department = department;
        }
        if let Some(avatar_url) = data.avatar_url {
            employee.avatar_url = Some(avatar_url);
        }
        if let Some(is_active) = data.is_active {
            employee.is_active = is_active;
        }
        employee.updated_at = Utc::now();

        let updated = employee.clone();
        self.store.save(&employees).await?;
        Ok(updated)
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let mut employees = self.store.load().await?;
        let before = employees.len();
        employees.retain(|e| e.id != id);

        if employees.len() == before {
            return Err(RepoError::NotFound(format!("Employee {id} not found")));
        }

        self.store.save(&employees).await?;
        Ok(())
    }

    /// Size of the full collection, ignoring any filter
    pub async fn count(&self) -> RepoResult<usize> {
        Ok(self.store.load().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::store::MemoryStore;

    fn sample(n: usize) -> EmployeeCreate {
        EmployeeCreate {
            full_name: format!("Employee {n}"),
            username: format!("employee{n}"),
            email: format!("employee{n}@company.com"),
            phone: "+1 (555) 123-4567".to_string(),
            position: if n % 3 == 0 {
                "Software Engineer".to_string()
            } else {
                "Product Manager".to_string()
            },
            department: if n % 2 == 0 {
                "Engineering".to_string()
            } else {
                "Product".to_string()
            },
            avatar_url: None,
            is_active: None,
        }
    }

    fn repo() -> EmployeeRepository {
        EmployeeRepository::new(Arc::new(MemoryStore::new()))
    }

    async fn repo_with(n: usize) -> EmployeeRepository {
        let repo = repo();
        for i in 0..n {
            repo.create(sample(i)).await.expect("seed employee");
        }
        repo
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let repo = repo();
        let created = repo.create(sample(1)).await.expect("create");

        assert!(!created.id.is_empty());
        assert!(created.is_active);
        assert_eq!(created.created_at, created.updated_at);

        let found = repo
            .find_by_id(&created.id)
            .await
            .expect("find")
            .expect("present");
        assert_eq!(found.username, "employee1");
        assert_eq!(found.email, "employee1@company.com");
    }

    #[tokio::test]
    async fn duplicate_username_and_email_are_rejected() {
        let repo = repo();
        repo.create(sample(1)).await.expect("create");

        let same_username = EmployeeCreate {
            email: "other@company.com".to_string(),
            ..sample(1)
        };
        let err = repo.create(same_username).await.expect_err("duplicate");
        assert!(matches!(err, RepoError::Duplicate(ref msg) if msg.contains("Username")));

        let same_email = EmployeeCreate {
            username: "othername".to_string(),
            ..sample(1)
        };
        let err = repo.create(same_email).await.expect_err("duplicate");
        assert!(matches!(err, RepoError::Duplicate(ref msg) if msg.contains("Email")));
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let repo = repo();
        let created = repo.create(sample(1)).await.expect("create");

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = repo
            .update(
                &created.id,
                EmployeeUpdate {
                    position: Some("Staff Engineer".to_string()),
                    ..EmployeeUpdate::default()
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.position, "Staff Engineer");
        // Unspecified fields retain their prior values
        assert_eq!(updated.full_name, created.full_name);
        assert_eq!(updated.username, created.username);
        assert_eq!(updated.phone, created.phone);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn update_uniqueness_excludes_self() {
        let repo = repo_with(2).await;
        let first = repo
            .find_by_username("employee0")
            .await
            .expect("find")
            .expect("present");

        // Re-submitting the record's own username is not a conflict
        let ok = repo
            .update(
                &first.id,
                EmployeeUpdate {
                    username: Some("employee0".to_string()),
                    ..EmployeeUpdate::default()
                },
            )
            .await;
        assert!(ok.is_ok());

        // Taking another record's username is
        let err = repo
            .update(
                &first.id,
                EmployeeUpdate {
                    username: Some("employee1".to_string()),
                    ..EmployeeUpdate::default()
                },
            )
            .await
            .expect_err("conflict");
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn update_and_delete_missing_id_fail_with_not_found() {
        let repo = repo();
        let err = repo
            .update("missing", EmployeeUpdate::default())
            .await
            .expect_err("not found");
        assert!(matches!(err, RepoError::NotFound(_)));

        let err = repo.delete("missing").await.expect_err("not found");
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = repo();
        let created = repo.create(sample(1)).await.expect("create");

        repo.delete(&created.id).await.expect("delete");
        assert!(repo.find_by_id(&created.id).await.expect("find").is_none());
        assert_eq!(repo.count().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn pagination_slices_in_insertion_order() {
        let repo = repo_with(12).await;

        let page2 = repo
            .find_all(&EmployeeQuery {
                page: 2,
                per_page: 5,
                ..EmployeeQuery::default()
            })
            .await
            .expect("page 2");

        assert_eq!(page2.data.len(), 5);
        assert_eq!(page2.pagination.total, 12);
        assert_eq!(page2.pagination.total_pages, 3);
        assert_eq!(page2.data[0].username, "employee5");

        // Concatenating all pages reconstructs the collection without
        // duplicates or omissions
        let mut usernames = Vec::new();
        for page in 1..=3 {
            let result = repo
                .find_all(&EmployeeQuery {
                    page,
                    per_page: 5,
                    ..EmployeeQuery::default()
                })
                .await
                .expect("page");
            usernames.extend(result.data.into_iter().map(|e| e.username));
        }
        let expected: Vec<String> = (0..12).map(|i| format!("employee{i}")).collect();
        assert_eq!(usernames, expected);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let repo = repo_with(3).await;
        let result = repo
            .find_all(&EmployeeQuery {
                page: 5,
                per_page: 10,
                ..EmployeeQuery::default()
            })
            .await
            .expect("find_all");

        assert!(result.data.is_empty());
        assert_eq!(result.pagination.total, 3);
        assert_eq!(result.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_fields() {
        let repo = repo_with(12).await;

        let by_department = repo
            .find_all(&EmployeeQuery {
                search: "ENGINEERING".to_string(),
                per_page: 100,
                ..EmployeeQuery::default()
            })
            .await
            .expect("search");
        // Departments alternate Engineering/Product: 6 matches
        assert_eq!(by_department.pagination.total, 6);
        assert!(
            by_department
                .data
                .iter()
                .all(|e| e.department.eq_ignore_ascii_case("engineering"))
        );

        // "engineer" also hits position "Software Engineer" (0,3,6,9),
        // so the union with the 6 even-indexed departments is 8
        let by_any_field = repo
            .find_all(&EmployeeQuery {
                search: "Engineer".to_string(),
                per_page: 100,
                ..EmployeeQuery::default()
            })
            .await
            .expect("search");
        assert_eq!(by_any_field.pagination.total, 8);

        let by_username = repo
            .find_all(&EmployeeQuery {
                search: "employee7".to_string(),
                ..EmployeeQuery::default()
            })
            .await
            .expect("search");
        assert_eq!(by_username.pagination.total, 1);

        let no_match = repo
            .find_all(&EmployeeQuery {
                search: "zzz".to_string(),
                ..EmployeeQuery::default()
            })
            .await
            .expect("search");
        assert_eq!(no_match.pagination.total, 0);
        assert_eq!(no_match.pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn status_filter_splits_by_is_active() {
        let repo = repo_with(4).await;
        let second = repo
            .find_by_username("employee1")
            .await
            .expect("find")
            .expect("present");
        repo.update(
            &second.id,
            EmployeeUpdate {
                is_active: Some(false),
                ..EmployeeUpdate::default()
            },
        )
        .await
        .expect("deactivate");

        let active = repo
            .find_all(&EmployeeQuery {
                status: StatusFilter::Active,
                ..EmployeeQuery::default()
            })
            .await
            .expect("active");
        assert_eq!(active.pagination.total, 3);

        let inactive = repo
            .find_all(&EmployeeQuery {
                status: StatusFilter::Inactive,
                ..EmployeeQuery::default()
            })
            .await
            .expect("inactive");
        assert_eq!(inactive.pagination.total, 1);
        assert_eq!(inactive.data[0].username, "employee1");

        // count ignores filters
        assert_eq!(repo.count().await.expect("count"), 4);
    }
}
