//! Static display-string tables.

use crate::model::quadrant::Quadrant;
use serde::Serialize;

/// Title and subtitle of one quadrant panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuadrantText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Per-quadrant labels, keyed by wire identifier when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuadrantLabels {
    pub urgent_important: QuadrantText,
    pub not_urgent_important: QuadrantText,
    pub urgent_not_important: QuadrantText,
    pub not_urgent_not_important: QuadrantText,
}

impl QuadrantLabels {
    pub fn get(&self, quadrant: Quadrant) -> &QuadrantText {
        match quadrant {
            Quadrant::UrgentImportant => &self.urgent_important,
            Quadrant::NotUrgentImportant => &self.not_urgent_important,
            Quadrant::UrgentNotImportant => &self.urgent_not_important,
            Quadrant::NotUrgentNotImportant => &self.not_urgent_not_important,
        }
    }
}

/// Every UI string of the board for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub add_task: &'static str,
    pub enter_task: &'static str,
    pub task_added: &'static str,
    pub task_added_description: &'static str,
    pub task_deleted: &'static str,
    pub task_deleted_description: &'static str,
    pub task_moved: &'static str,
    pub task_moved_description: &'static str,
    pub task_updated: &'static str,
    pub task_updated_description: &'static str,
    pub delete_task: &'static str,
    pub delete_task_confirmation: &'static str,
    pub edit_task: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
    pub move_to: &'static str,
    pub hide_completed: &'static str,
    pub show_completed: &'static str,
    pub clear_filter: &'static str,
    pub quadrants: QuadrantLabels,
}

pub(super) static EN: Translations = Translations {
    app_title: "Eisenhower Matrix",
    app_subtitle: "Organize your tasks by urgency and importance",
    add_task: "Add Task",
    enter_task: "Enter task...",
    task_added: "Task added",
    task_added_description: "Your task has been added successfully.",
    task_deleted: "Task deleted",
    task_deleted_description: "Your task has been removed.",
    task_moved: "Task moved",
    task_moved_description: "Your task has been moved to a different quadrant.",
    task_updated: "Task updated",
    task_updated_description: "Your task has been updated successfully.",
    delete_task: "Delete task?",
    delete_task_confirmation:
        "This action cannot be undone. The task will be deleted permanently.",
    edit_task: "Edit task",
    cancel: "Cancel",
    delete: "Delete",
    save: "Save",
    move_to: "Move to:",
    hide_completed: "Hide Completed",
    show_completed: "Show Completed",
    clear_filter: "Clear filter",
    quadrants: QuadrantLabels {
        urgent_important: QuadrantText {
            title: "Do First",
            subtitle: "Urgent & Important",
        },
        not_urgent_important: QuadrantText {
            title: "Schedule",
            subtitle: "Not Urgent & Important",
        },
        urgent_not_important: QuadrantText {
            title: "Delegate",
            subtitle: "Urgent & Not Important",
        },
        not_urgent_not_important: QuadrantText {
            title: "Eliminate",
            subtitle: "Not Urgent & Not Important",
        },
    },
};

pub(super) static RU: Translations = Translations {
    app_title: "Матрица Эйзенхауэра",
    app_subtitle: "Организуйте ваши задачи по срочности и важности",
    add_task: "Добавить задачу",
    enter_task: "Введите задачу...",
    task_added: "Задача добавлена",
    task_added_description: "Ваша задача успешно добавлена.",
    task_deleted: "Задача удалена",
    task_deleted_description: "Ваша задача была удалена.",
    task_moved: "Задача перемещена",
    task_moved_description: "Ваша задача была перемещена в другой квадрант.",
    task_updated: "Задача обновлена",
    task_updated_description: "Ваша задача успешно обновлена.",
    delete_task: "Удалить задачу?",
    delete_task_confirmation: "Это действие нельзя отменить. Задача будет удалена навсегда.",
    edit_task: "Редактировать",
    cancel: "Отмена",
    delete: "Удалить",
    save: "Сохранить",
    move_to: "Переместить в:",
    hide_completed: "Скрыть выполненные",
    show_completed: "Показать выполненные",
    clear_filter: "Сбросить фильтр",
    quadrants: QuadrantLabels {
        urgent_important: QuadrantText {
            title: "Сделать сейчас",
            subtitle: "Срочно и важно",
        },
        not_urgent_important: QuadrantText {
            title: "Запланировать",
            subtitle: "Не срочно, но важно",
        },
        urgent_not_important: QuadrantText {
            title: "Делегировать",
            subtitle: "Срочно, но не важно",
        },
        not_urgent_not_important: QuadrantText {
            title: "Исключить",
            subtitle: "Не срочно и не важно",
        },
    },
};

pub(super) static ZH: Translations = Translations {
    app_title: "艾森豪威尔矩阵",
    app_subtitle: "按紧急程度和重要性组织任务",
    add_task: "添加任务",
    enter_task: "输入任务...",
    task_added: "任务已添加",
    task_added_description: "您的任务已成功添加。",
    task_deleted: "任务已删除",
    task_deleted_description: "您的任务已被删除。",
    task_moved: "任务已移动",
    task_moved_description: "您的任务已移动到其他象限。",
    task_updated: "任务已更新",
    task_updated_description: "您的任务已成功更新。",
    delete_task: "删除任务？",
    delete_task_confirmation: "此操作无法撤消。任务将被永久删除。",
    edit_task: "编辑",
    cancel: "取消",
    delete: "删除",
    save: "保存",
    move_to: "移至：",
    hide_completed: "隐藏已完成",
    show_completed: "显示已完成",
    clear_filter: "清除过滤器",
    quadrants: QuadrantLabels {
        urgent_important: QuadrantText {
            title: "立即执行",
            subtitle: "紧急且重要",
        },
        not_urgent_important: QuadrantText {
            title: "计划安排",
            subtitle: "不紧急但重要",
        },
        urgent_not_important: QuadrantText {
            title: "委派他人",
            subtitle: "紧急但不重要",
        },
        not_urgent_not_important: QuadrantText {
            title: "删除消除",
            subtitle: "不紧急不重要",
        },
    },
};
