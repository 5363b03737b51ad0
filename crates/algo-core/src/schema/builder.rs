//! 스키마 컴파일러.
//!
//! 컴파일은 2단계로 진행됩니다: 빌더가 선언을 선언 순서대로 수집하고,
//! `compile()`이 기본값을 한 번 검증한 뒤 불변 `Schema`를 고정합니다.
//! 컴파일 실패는 복구 불가능하며 부분적으로 컴파일된 스키마가 반환되는
//! 일은 없습니다.
//!
//! 두 종류의 컴파일러가 있습니다:
//! - `ConfigBuilder` - 생성자 없는 타입용. 필드는 생성 후 외부에서
//!   할당되며, 제외 목록은 항상 비어 있습니다.
//! - `StructBuilder` - 키워드 생성자가 있는 타입용. 최대 하나의 베이스
//!   스키마를 합성(composition)으로 확장할 수 있고, 제외 마커를 존중합니다.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::decl::{AttrValue, FieldDecl, FieldDescriptor, Resolved};
use serde::Serialize;

/// 컴파일된 불변 스키마.
///
/// 필드는 선언 순서를 유지하며, 컴파일 후에는 절대 변경되지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDescriptor>,
    attrs: Vec<(String, AttrValue)>,
}

impl Schema {
    /// 생성자 없는(config) 타입의 스키마 빌더를 생성합니다.
    pub fn config(name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            name: name.into(),
            decls: Vec::new(),
        }
    }

    /// 키워드 생성자가 있는(record) 타입의 스키마 빌더를 생성합니다.
    pub fn record(name: impl Into<String>) -> StructBuilder {
        StructBuilder {
            name: name.into(),
            bases: Vec::new(),
            decls: Vec::new(),
        }
    }

    /// 스키마 이름을 반환합니다.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 선언 순서의 필드 디스크립터 목록을 반환합니다.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// 이름으로 필드 디스크립터를 찾습니다.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// 선언 순서의 필드 이름 목록을 반환합니다.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// 표현 문자열에서 제외되는 필드 이름 목록을 반환합니다.
    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.excluded)
            .map(|f| f.name.as_str())
    }

    /// 이름으로 보조 속성을 찾습니다.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, attr)| attr)
    }
}

/// config 타입 스키마 빌더.
#[derive(Debug)]
pub struct ConfigBuilder {
    name: String,
    decls: Vec<(String, FieldDecl)>,
}

impl ConfigBuilder {
    /// 필드 선언을 추가합니다.
    pub fn field(mut self, name: impl Into<String>, decl: FieldDecl) -> Self {
        self.decls.push((name.into(), decl));
        self
    }

    /// 선언을 검증하고 불변 스키마로 고정합니다.
    ///
    /// config 스키마는 제외 마커를 무시합니다. 제외 목록은 항상 비어
    /// 있으며, 숨김 변형으로 선언된 필드도 표현 문자열에 나타납니다.
    pub fn compile(self) -> SchemaResult<Schema> {
        let mut schema = compile_decls(self.name, &[], self.decls)?;
        for field in &mut schema.fields {
            field.excluded = false;
        }
        Ok(schema)
    }
}

/// record(struct) 타입 스키마 빌더.
#[derive(Debug)]
pub struct StructBuilder {
    name: String,
    bases: Vec<Schema>,
    decls: Vec<(String, FieldDecl)>,
}

impl StructBuilder {
    /// 베이스 스키마를 확장합니다. 베이스 필드는 파생 필드보다 앞에,
    /// 베이스의 선언 순서대로 배치됩니다.
    ///
    /// 베이스는 최대 하나만 허용되며, 둘 이상 선언하면 `compile()`이
    /// 실패합니다.
    pub fn extends(mut self, base: &Schema) -> Self {
        self.bases.push(base.clone());
        self
    }

    /// 필드 선언을 추가합니다.
    pub fn field(mut self, name: impl Into<String>, decl: FieldDecl) -> Self {
        self.decls.push((name.into(), decl));
        self
    }

    /// 선언을 검증하고 불변 스키마로 고정합니다.
    pub fn compile(self) -> SchemaResult<Schema> {
        if self.bases.len() > 1 {
            return Err(SchemaError::MultipleInheritance {
                schema: self.name,
                count: self.bases.len(),
            });
        }

        let base_fields = match self.bases.first() {
            Some(base) => base.fields.clone(),
            None => Vec::new(),
        };

        compile_decls(self.name, &base_fields, self.decls)
    }
}

fn compile_decls(
    name: String,
    base_fields: &[FieldDescriptor],
    decls: Vec<(String, FieldDecl)>,
) -> SchemaResult<Schema> {
    let mut fields: Vec<FieldDescriptor> = base_fields.to_vec();
    let mut attrs = Vec::new();

    for (decl_name, decl) in decls {
        match decl.resolve(&decl_name)? {
            Resolved::Field(descriptor) => {
                if fields.iter().any(|f| f.name == descriptor.name) {
                    return Err(SchemaError::DuplicateField {
                        field: descriptor.name,
                    });
                }
                fields.push(descriptor);
            }
            Resolved::Attr(attr) => attrs.push((decl_name, attr)),
        }
    }

    Ok(Schema {
        name,
        fields,
        attrs,
    })
}
