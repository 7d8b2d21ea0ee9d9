//! Deterministic prompt assembly
//!
//! Every prompt sent to the backend is assembled from scene fields by the
//! functions here, so identical scenes always produce identical requests.
//! The system directive is the authoritative statement of the
//! structure-lock rule as the generator sees it; the orchestrator enforces
//! the same rule again on whatever comes back.

use siteplan_scene::Scene;

/// System directive for scene-edit requests, parameterized on the current
/// structure-lock state.
#[must_use]
pub fn system_instruction(lock_engaged: bool) -> String {
    let lock_state = if lock_engaged { "ON" } else { "OFF" };
    format!(
        "You are an AI assistant for an architectural visualization tool. \
         Your task is to process a user's natural language request to modify a scene described in a JSON object.\n\
         Your response MUST be ONLY the updated, complete JSON object of the entire scene, conforming to the provided schema.\n\
         Do NOT add any text, explanations, or markdown formatting.\n\
         If the request is ambiguous or impossible, make a reasonable interpretation but do not change the fundamental layout without explicit instruction.\n\
         All coordinates and dimensions are in meters. The origin (0,0) is the top-left corner of the plot.\n\
         CRITICAL RULE: The 'structureLock' is currently {lock_state}.\n\
         - If 'structureLock' is ON, you are FORBIDDEN from changing the x/y coordinates of any element (offices, warehouse, courtyard, roads). \
         You are only allowed to change properties like materials, colors, dimensions (w,h), counts (skylights, parking slots), or spacing.\n\
         - If the user asks to 'move' or 'relayout' an element while the lock is on, do not perform the change; \
         instead, change only the 'structureLock' property to 'false' in the returned JSON and nothing else.\n\
         - If 'structureLock' is OFF, you are allowed to change x/y coordinates."
    )
}

/// User-turn contents for a scene-edit request
#[must_use]
pub fn edit_contents(scene_json: &str, instruction: &str) -> String {
    format!(
        "Based on the current scene JSON, apply the following change: \"{instruction}\".\n\nCurrent Scene:\n{scene_json}"
    )
}

/// Photorealistic-rendering prompt assembled from the scene's buildings
#[must_use]
pub fn image_prompt(scene: &Scene) -> String {
    let offices = scene
        .offices
        .iter()
        .map(|o| {
            format!(
                "a {}x{}m {} office block colored {}",
                o.w, o.h, o.material, o.color
            )
        })
        .collect::<Vec<_>>()
        .join(" and ");
    let warehouse = format!(
        "a {}x{}m {} warehouse with a {} roof",
        scene.warehouse.w, scene.warehouse.h, scene.warehouse.material, scene.warehouse.roof.kind
    );
    format!(
        "Photorealistic, high-detail architectural rendering of a modern industrial site. \
         The scene includes: {offices}, and {warehouse}. \
         The style is a sunny day, 4K, professional photograph."
    )
}

/// Cinematic fly-through prompt assembled from the scene's buildings
#[must_use]
pub fn video_prompt(scene: &Scene) -> String {
    let buildings = scene
        .offices
        .iter()
        .map(|o| format!("{} office", o.material))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "A cinematic, smooth drone fly-through of a modern industrial architectural site. \
         Show the details of the buildings: {buildings} and the {} warehouse.",
        scene.warehouse.material
    )
}
