//! # OpenAPI 仕様テスト
//!
//! utoipa から生成される OpenAPI 仕様の整合性を検証する。

use agecalc_api::openapi::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi仕様がパニックせず生成される() {
   let doc = ApiDoc::openapi();
   // パニックしなければ成功
   let _json = doc.to_json().unwrap();
}

#[test]
fn test_全パスが含まれている() {
   let doc = ApiDoc::openapi();
   let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

   assert_eq!(paths.len(), 3, "パス数が 3 であること: {paths:?}");
   assert!(paths.contains(&"/"));
   assert!(paths.contains(&"/health"));
   assert!(paths.contains(&"/compute-age/{name}/{birth_date}"));
}

#[test]
fn test_全タグが含まれている() {
   let doc = ApiDoc::openapi();
   let tags: Vec<&str> = doc
      .tags
      .as_ref()
      .expect("tags が存在すること")
      .iter()
      .map(|t| t.name.as_str())
      .collect();

   assert!(tags.contains(&"root"));
   assert!(tags.contains(&"health"));
   assert!(tags.contains(&"age"));
}

#[test]
fn test_レスポンススキーマが登録されている() {
   let doc = ApiDoc::openapi();
   let components = doc.components.as_ref().expect("components が存在すること");

   for name in [
      "AgeResponse",
      "GreetingResponse",
      "HealthResponse",
      "ErrorResponse",
      "DetailResponse",
   ] {
      assert!(
         components.schemas.contains_key(name),
         "{name} スキーマが存在すること"
      );
   }
}
