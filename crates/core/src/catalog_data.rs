//! Built-in topic catalog shipped with the hub.

use crate::model::{Catalog, CatalogDraft, ModuleDraft, TopicDraft};

struct TopicSeed {
    id: &'static str,
    title: &'static str,
    body: &'static str,
}

struct ModuleSeed {
    id: &'static str,
    name: &'static str,
    topics: &'static [TopicSeed],
}

const MODULES: &[ModuleSeed] = &[
    ModuleSeed {
        id: "1",
        name: "Database Fundamentals",
        topics: &[
            TopicSeed {
                id: "normalization",
                title: "Normalization (1NF, 2NF, 3NF)",
                body: "Split data so each fact lives in exactly one place.\n\n\
                       - **1NF**: atomic columns, no repeating groups\n\
                       - **2NF**: no partial dependency on a composite key\n\
                       - **3NF**: no transitive dependency on the key",
            },
            TopicSeed {
                id: "denormalization",
                title: "Denormalization",
                body: "Deliberately duplicate data to avoid joins on hot read paths.\n\n\
                       ```sql\nALTER TABLE orders ADD COLUMN customer_name TEXT;\n```",
            },
            TopicSeed {
                id: "surrogate-key",
                title: "Surrogate Key",
                body: "A system-generated key with no business meaning.\n\n\
                       ```sql\nCREATE TABLE customers (\n    id BIGSERIAL PRIMARY KEY,\n    email TEXT UNIQUE NOT NULL\n);\n```",
            },
        ],
    },
    ModuleSeed {
        id: "2",
        name: "SQL Operations",
        topics: &[
            TopicSeed {
                id: "union",
                title: "UNION vs UNION ALL",
                body: "`UNION` removes duplicates (and pays for a sort or hash); `UNION ALL` keeps them.\n\n\
                       ```sql\nSELECT city FROM customers\nUNION ALL\nSELECT city FROM suppliers;\n```",
            },
            TopicSeed {
                id: "subquery-vs-join",
                title: "Subquery vs JOIN",
                body: "Most planners rewrite simple subqueries into joins; prefer whichever reads clearer.\n\n\
                       ```sql\nSELECT o.* FROM orders o\nJOIN customers c ON c.id = o.customer_id\nWHERE c.country = 'NL';\n```",
            },
            TopicSeed {
                id: "correlated-subquery",
                title: "Correlated Subquery",
                body: "A subquery that references the outer row and is evaluated per row.\n\n\
                       ```sql\nSELECT e.name FROM employees e\nWHERE e.salary > (\n    SELECT AVG(salary) FROM employees WHERE dept_id = e.dept_id\n);\n```",
            },
            TopicSeed {
                id: "exists-vs-in",
                title: "EXISTS vs IN",
                body: "`EXISTS` stops at the first match; `NOT IN` misbehaves when the list contains NULL.\n\n\
                       ```sql\nSELECT * FROM customers c\nWHERE EXISTS (SELECT 1 FROM orders o WHERE o.customer_id = c.id);\n```",
            },
            TopicSeed {
                id: "cte",
                title: "CTE (Common Table Expression)",
                body: "Named subqueries declared with `WITH`, optionally recursive.\n\n\
                       ```sql\nWITH recent AS (\n    SELECT * FROM orders WHERE created_at > now() - interval '7 days'\n)\nSELECT customer_id, count(*) FROM recent GROUP BY customer_id;\n```",
            },
            TopicSeed {
                id: "pivot",
                title: "PIVOT Operation",
                body: "Turn row values into columns, portably with conditional aggregation.\n\n\
                       ```sql\nSELECT product,\n    SUM(CASE WHEN quarter = 1 THEN amount END) AS q1,\n    SUM(CASE WHEN quarter = 2 THEN amount END) AS q2\nFROM sales GROUP BY product;\n```",
            },
        ],
    },
    ModuleSeed {
        id: "3",
        name: "Indexing & Performance",
        topics: &[
            TopicSeed {
                id: "covering-index",
                title: "Covering Index",
                body: "An index holding every column a query needs, enabling index-only scans.\n\n\
                       ```sql\nCREATE INDEX idx_orders_customer ON orders (customer_id) INCLUDE (total);\n```",
            },
            TopicSeed {
                id: "clustered-index",
                title: "Clustered Index",
                body: "Defines the physical order of table rows; a table has at most one.",
            },
            TopicSeed {
                id: "query-execution-plan",
                title: "Query Execution Plan",
                body: "Ask the planner what it intends to do, and what it actually did.\n\n\
                       ```sql\nEXPLAIN ANALYZE SELECT * FROM orders WHERE customer_id = 42;\n```",
            },
        ],
    },
    ModuleSeed {
        id: "4",
        name: "Transactions & Concurrency",
        topics: &[
            TopicSeed {
                id: "isolation-levels",
                title: "Transaction Isolation Levels",
                body: "Read Uncommitted, Read Committed, Repeatable Read and Serializable trade anomalies for throughput.\n\n\
                       ```sql\nSET TRANSACTION ISOLATION LEVEL SERIALIZABLE;\n```",
            },
            TopicSeed {
                id: "deadlock",
                title: "Deadlock",
                body: "Two transactions each wait on a lock the other holds. Acquire locks in a consistent order.",
            },
            TopicSeed {
                id: "locking",
                title: "Optimistic vs Pessimistic Locking",
                body: "Pessimistic locks rows up front; optimistic checks a version at write time.\n\n\
                       ```sql\nUPDATE accounts SET balance = 90, version = version + 1\nWHERE id = 1 AND version = 7;\n```",
            },
            TopicSeed {
                id: "two-phase-commit",
                title: "Two-Phase Commit (2PC)",
                body: "A coordinator asks every participant to prepare, then to commit.\n\n\
                       ```sql\nPREPARE TRANSACTION 'tx-42';\nCOMMIT PREPARED 'tx-42';\n```",
            },
            TopicSeed {
                id: "snapshot-isolation",
                title: "Snapshot Isolation",
                body: "Each transaction reads a consistent snapshot; write skew is still possible.",
            },
        ],
    },
    ModuleSeed {
        id: "5",
        name: "Data Warehousing",
        topics: &[
            TopicSeed {
                id: "etl-vs-elt",
                title: "ETL vs ELT",
                body: "ETL transforms before loading; ELT loads raw data and transforms inside the warehouse.",
            },
            TopicSeed {
                id: "star-schema",
                title: "Star Schema",
                body: "A central fact table surrounded by denormalized dimension tables.\n\n\
                       ```sql\nSELECT d.year, SUM(f.amount)\nFROM fact_sales f JOIN dim_date d ON d.id = f.date_id\nGROUP BY d.year;\n```",
            },
            TopicSeed {
                id: "olap-vs-oltp",
                title: "OLAP vs OLTP",
                body: "OLTP serves many small transactional writes; OLAP serves few large analytical reads.",
            },
        ],
    },
    ModuleSeed {
        id: "6",
        name: "Advanced Features",
        topics: &[
            TopicSeed {
                id: "rank-functions",
                title: "RANK() vs DENSE_RANK()",
                body: "`RANK` leaves gaps after ties; `DENSE_RANK` does not.\n\n\
                       ```sql\nSELECT name, score,\n    RANK() OVER (ORDER BY score DESC),\n    DENSE_RANK() OVER (ORDER BY score DESC)\nFROM players;\n```",
            },
            TopicSeed {
                id: "row-level-security",
                title: "Row-Level Security (RLS)",
                body: "Policies filter which rows a role may see or modify.\n\n\
                       ```sql\nALTER TABLE documents ENABLE ROW LEVEL SECURITY;\nCREATE POLICY owner_only ON documents USING (owner = current_user);\n```",
            },
            TopicSeed {
                id: "full-text-search",
                title: "PostgreSQL Full-Text Search",
                body: "Match `tsvector` documents against `tsquery` expressions, backed by a GIN index.\n\n\
                       ```sql\nSELECT title FROM articles\nWHERE to_tsvector('english', body) @@ to_tsquery('index & scan');\n```",
            },
            TopicSeed {
                id: "rds-vs-aurora",
                title: "Amazon RDS vs Aurora",
                body: "RDS runs stock engines on EBS volumes; Aurora replaces the storage layer with a shared, replicated log.",
            },
            TopicSeed {
                id: "ntile",
                title: "NTILE(n)",
                body: "Split ordered rows into `n` roughly equal buckets.\n\n\
                       ```sql\nSELECT name, NTILE(4) OVER (ORDER BY salary) AS quartile FROM employees;\n```",
            },
        ],
    },
];

/// Unvalidated form of the built-in catalog.
#[must_use]
pub fn builtin_draft() -> CatalogDraft {
    let modules = MODULES
        .iter()
        .map(|module| ModuleDraft {
            id: module.id.to_owned(),
            name: module.name.to_owned(),
            total: u32::try_from(module.topics.len()).ok(),
            topics: module
                .topics
                .iter()
                .map(|topic| TopicDraft {
                    id: topic.id.to_owned(),
                    title: topic.title.to_owned(),
                    body: Some(topic.body.to_owned()),
                })
                .collect(),
        })
        .collect();
    CatalogDraft { modules }
}

/// The built-in catalog: 25 topics across 6 modules.
///
/// # Panics
///
/// Panics if the built-in data violates catalog invariants, which the tests rule out.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    builtin_draft()
        .validate()
        .expect("built-in catalog should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModuleId, TopicId};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_draft().validate().unwrap();
        assert_eq!(catalog.topic_count(), 25);
        assert_eq!(catalog.modules().len(), 6);
    }

    #[test]
    fn module_totals_match_topic_lists() {
        let catalog = builtin_catalog();
        let totals: Vec<u32> = catalog.modules().iter().map(|m| m.total_topics()).collect();
        assert_eq!(totals, vec![3, 6, 3, 5, 3, 5]);
        for module in catalog.modules() {
            assert_eq!(module.total_topics() as usize, module.topic_ids().len());
        }
    }

    #[test]
    fn topics_carry_module_names() {
        let catalog = builtin_catalog();
        let topic = catalog.topic(&TopicId::new("ntile")).unwrap();
        assert_eq!(topic.module_id(), &ModuleId::new("6"));
        assert_eq!(topic.module_name(), "Advanced Features");
    }
}
