use crate::OperationKind;

/// CommonJS module that loads and re-exports every document generated for
/// one kind of operation, keyed by root field name.
#[derive(Clone, Debug)]
pub struct KindReexportIndex {
    field_names: Vec<String>,
    file_extension: String,
}
impl KindReexportIndex {
    pub fn field_names(&self) -> &[String] {
        self.field_names.as_slice()
    }

    pub fn new(file_extension: impl AsRef<str>) -> Self {
        Self {
            field_names: vec![],
            file_extension: file_extension.as_ref().to_string(),
        }
    }

    pub fn push(&mut self, field_name: impl AsRef<str>) {
        self.field_names.push(field_name.as_ref().to_string());
    }

    pub fn render(&self) -> String {
        let mut index = String::from(
            "const fs = require('fs');\nconst path = require('path');\n\n",
        );
        for field_name in &self.field_names {
            index.push_str(format!(
                "module.exports.{field_name} = fs.readFileSync(path.join(__dirname, \
                '{field_name}.{}'), 'utf8');\n",
                self.file_extension,
            ).as_str());
        }
        index
    }
}

/// CommonJS module that re-exports the per-kind indexes.
#[derive(Clone, Debug, Default)]
pub struct RootReexportIndex {
    kinds: Vec<OperationKind>,
}
impl RootReexportIndex {
    pub fn kinds(&self) -> &[OperationKind] {
        self.kinds.as_slice()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: OperationKind) {
        self.kinds.push(kind);
    }

    pub fn render(&self) -> String {
        self.kinds.iter()
            .map(|kind| {
                let dir_name = kind.directory_name();
                format!("module.exports.{dir_name} = require('./{dir_name}');\n")
            })
            .collect()
    }
}
