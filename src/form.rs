//! Parade planner form flow: hero CTA, submit handling, results rendering.
//!
//! The geocode call is the only async edge; everything else is synchronous
//! DOM mutation in the same execution context as the render ticks.

use crate::constants::DISPLAY_TEMP_C;
use crate::dom;
use crate::geocode;
use crate::recommend;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_hero_button(document: &web::Document) {
    let Ok(Some(button)) = document.query_selector(".hero-cta") else {
        log::warn!("[form] missing .hero-cta button");
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(&button, move || {
        dom::show_block(&doc, "form-section");
        if let Some(section) = doc.get_element_by_id("form-section") {
            dom::scroll_into_view_smooth(&section);
        }
    });
}

pub fn wire_weather_form(document: &web::Document) {
    let Some(form) = document.get_element_by_id("weather-form") else {
        log::warn!("[form] missing #weather-form");
        return;
    };
    let doc = document.clone();
    dom::add_submit_listener(&form, move || {
        let city = dom::input_value(&doc, "city").trim().to_string();
        let date = dom::input_value(&doc, "date");
        let activity = dom::input_value(&doc, "activity").trim().to_string();

        dom::show_block(&doc, "loading-message");

        let doc = doc.clone();
        spawn_local(async move {
            match geocode::lookup(&city).await {
                Ok(location) => {
                    dom::hide(&doc, "loading-message");
                    show_results_section(&doc);
                    show_result_content(&doc, &city, &location.display_name, &date, &activity);
                }
                Err(e) => {
                    dom::hide(&doc, "loading-message");
                    dom::alert(&format!(
                        "\u{274c} Error: {e}. Please check the city name and try again."
                    ));
                }
            }
        });
    });
}

pub fn wire_back_button(document: &web::Document) {
    if let Some(button) = document.get_element_by_id("back-button") {
        let doc = document.clone();
        dom::add_click_listener(&button, move || go_back_to_form(&doc));
    }
}

fn show_results_section(document: &web::Document) {
    dom::hide(document, "form-section");
    dom::show_block(document, "results-section");
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("results-mode");
    }
}

fn go_back_to_form(document: &web::Document) {
    dom::hide(document, "results-section");
    dom::show_block(document, "form-section");
    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1("results-mode");
    }
    if let Some(section) = document.get_element_by_id("form-section") {
        dom::scroll_into_view_smooth(&section);
    }
}

fn show_result_content(
    document: &web::Document,
    city: &str,
    display_name: &str,
    date: &str,
    activity: &str,
) {
    let spot = recommend::detect_spot(city);
    let essaouira = recommend::is_essaouira(city, display_name);
    let temp = DISPLAY_TEMP_C;

    let recommendation = recommend::recommendation(activity, temp, spot, essaouira);
    let icon = recommend::icon(activity, spot, essaouira);
    let display_location = match spot {
        Some((name, _)) => recommend::spot_display_name(name),
        None => display_name.to_string(),
    };

    let html = format!(
        "<div class=\"forecast-layout\">\
           <div class=\"result-header\">\
             <div class=\"result-label\">{display_location}</div>\
             <div class=\"result-label\">{date}</div>\
           </div>\
           <div class=\"result-body\">\
             <div class=\"left-col\">\
               <div class=\"result-card temperature\">\
                 <div class=\"result-title\">Temp\u{e9}rature</div>\
                 <div class=\"result-main\">{temp}\u{b0}C</div>\
               </div>\
               <div class=\"result-card activity\">\
                 <div class=\"result-title\">Activit\u{e9}</div>\
                 <div class=\"result-main\">{activity}</div>\
               </div>\
             </div>\
             <div class=\"right-col\">\
               <div class=\"result-card recommendation\">\
                 <div class=\"result-title\">Recommandation</div>\
                 <div class=\"result-icon\">{icon}</div>\
                 <div class=\"result-details\">{recommendation}</div>\
               </div>\
             </div>\
           </div>\
         </div>"
    );
    if let Some(el) = document.get_element_by_id("result-content") {
        el.set_inner_html(&html);
    }
}
