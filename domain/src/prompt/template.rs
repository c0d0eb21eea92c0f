//! Prompt templates for Cypher generation

/// Which family of model the system prompt is written for.
///
/// Local models follow numbered rules more reliably than prose, so they get
/// a stricter, list-shaped prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    #[default]
    Hosted,
    Local,
}

/// Graph schema shared by both prompt styles.
const GRAPH_SCHEMA: &str = r#"**1. Graph Schema**
Node labels and their key properties:
- Project {name}
- Folder {name, path, project_id}
- File {name, path, extension, project_id}
- Module {name, qualified_name, path, project_id}
- Class {name, qualified_name, path, project_id}
- Function {name, qualified_name, path, decorators, project_id}
- Method {name, qualified_name, path, decorators, project_id}

Relationships:
- (Project)-[:CONTAINS_FOLDER]->(Folder), (Folder)-[:CONTAINS_FILE]->(File)
- (Module)-[:DEFINES]->(Class|Function), (Class)-[:DEFINES_METHOD]->(Method)
- (Function|Method)-[:CALLS]->(Function|Method)
- (Class)-[:INHERITS]->(Class), (Module)-[:IMPORTS]->(Module)

**2. Query Rules**
- ALWAYS add `LIMIT 50` to queries that list items.
- For "how many", "count" or "total", return ONLY the count: `RETURN count(n) AS total`.
- Return `name`, `path` and `qualified_name` with clear aliases when listing items.
- Use `STARTS WITH` for path matching and `toLower(...) CONTAINS` for keyword search."#;

/// Templates for the query-generation prompts
pub struct QueryPromptTemplate;

impl QueryPromptTemplate {
    /// System prompt for the given style, scoped to a project.
    pub fn system(style: PromptStyle, project_id: &str) -> String {
        match style {
            PromptStyle::Hosted => Self::hosted_system(project_id),
            PromptStyle::Local => Self::local_system(project_id),
        }
    }

    /// System prompt for hosted models
    pub fn hosted_system(project_id: &str) -> String {
        format!(
            r#"You are a Cypher query generation machine.
You do not explain. You ONLY output raw Cypher code.

{GRAPH_SCHEMA}

**3. Output Rules**
- PROJECT SEGREGATION: filter all nodes by `project_id: '{project_id}'`.
- NO EXPLANATIONS: no "Note:", no "Here is the query", no conversational text.
- NO MARKDOWN: do not wrap the query in code fences.
- ONLY CYPHER: the entire response must be one executable Cypher statement.

GOOD OUTPUT:
MATCH (n {{project_id: '{project_id}'}}) RETURN n.name AS name LIMIT 50;"#
        )
    }

    /// System prompt for local models (Ollama and similar)
    pub fn local_system(project_id: &str) -> String {
        format!(
            r#"You are a Neo4j Cypher query generator. You ONLY respond with a valid Cypher query.

{GRAPH_SCHEMA}

**3. Critical Rules**
1. Filter all nodes by `project_id: '{project_id}'`.
2. Output ONLY the query. No "Note:", "Explanation:" or "Here is...".
3. Never use `UNION`. Generate a single, simple `MATCH` query.
4. Bind every node to a variable and alias every returned property.
5. Follow the clause order `MATCH`, `WHERE`, `RETURN`, `LIMIT`.
6. End the query with a semicolon."#
        )
    }
}
